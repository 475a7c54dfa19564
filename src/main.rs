use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use workable_proxy::{start_web_server, ProxyConfig, WorkableClient};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "workable-proxy")]
#[command(about = "CORS-friendly proxy in front of the Workable API")]
struct Args {
    /// Listen port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Pause between consecutive Workable page fetches (overrides PAGE_DELAY_MS)
    #[arg(long)]
    page_delay_ms: Option<u64>,

    /// Skip the duplicate-candidate lookup before creating candidates
    #[arg(long)]
    no_duplicate_check: bool,

    /// Also write JSON logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            Some(
                fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
                    .with_current_span(false)
                    .with_span_list(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(file_layer)
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("workable_proxy=info")),
        )
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real deployments set the variables directly
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let mut config = ProxyConfig::from_env()?;
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(millis) = args.page_delay_ms {
        config.page_delay = Duration::from_millis(millis);
    }
    if args.no_duplicate_check {
        config.check_duplicates = false;
    }

    info!("Workable account: {}", config.account);
    info!("Page delay: {:?}", config.page_delay);
    info!("Duplicate check: {}", config.check_duplicates);

    let client = WorkableClient::new(&config)?;
    start_web_server(config, Arc::new(client)).await
}
