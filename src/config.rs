// src/config.rs
use anyhow::{Context, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

pub const DEFAULT_HOST: &str = "workable.com";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_PAGE_LIMIT: u32 = 50;
/// Workable caps `limit` at 100 per page.
pub const MAX_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 200;

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct ProxyConfig {
    pub account: String,
    pub token: String,
    pub host: String,
    /// Replaces `https://{account}.{host}/spi/v3` entirely when set.
    pub base_url: Option<String>,
    pub port: u16,
    pub timeout: Duration,
    pub page_delay: Duration,
    pub default_limit: u32,
    pub max_limit: u32,
    pub max_pages: u32,
    pub check_duplicates: bool,
}

impl ProxyConfig {
    pub fn new(account: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            token: token.into(),
            host: DEFAULT_HOST.to_string(),
            base_url: None,
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            page_delay: Duration::ZERO,
            default_limit: DEFAULT_PAGE_LIMIT,
            max_limit: MAX_PAGE_LIMIT,
            max_pages: DEFAULT_MAX_PAGES,
            check_duplicates: true,
        }
    }

    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let account =
            first_var(&lookup, &["WORKABLE_SUBDOMAIN", "WORKABLE_ACCOUNT"]).unwrap_or_default();
        let token =
            first_var(&lookup, &["WORKABLE_TOKEN", "WORKABLE_API_KEY"]).unwrap_or_default();

        let mut config = Self::new(account, token);

        if let Some(host) = first_var(&lookup, &["WORKABLE_HOST"]) {
            config.host = host;
        }
        config.base_url = first_var(&lookup, &["WORKABLE_BASE_URL"])
            .map(|url| url.trim_end_matches('/').to_string());

        if let Some(port) = first_var(&lookup, &["PORT", "ROCKET_PORT"]) {
            config.port = parse_value("PORT", &port)?;
        }
        if let Some(secs) = first_var(&lookup, &["UPSTREAM_TIMEOUT_SECS"]) {
            config.timeout = Duration::from_secs(parse_value("UPSTREAM_TIMEOUT_SECS", &secs)?);
        }
        if let Some(millis) = first_var(&lookup, &["PAGE_DELAY_MS"]) {
            config.page_delay = Duration::from_millis(parse_value("PAGE_DELAY_MS", &millis)?);
        }
        if let Some(limit) = first_var(&lookup, &["DEFAULT_PAGE_LIMIT"]) {
            config.default_limit = parse_value("DEFAULT_PAGE_LIMIT", &limit)?;
        }
        if let Some(limit) = first_var(&lookup, &["MAX_PAGE_LIMIT"]) {
            config.max_limit = parse_value("MAX_PAGE_LIMIT", &limit)?;
        }
        if let Some(pages) = first_var(&lookup, &["MAX_PAGES"]) {
            config.max_pages = parse_value("MAX_PAGES", &pages)?;
        }
        if let Some(flag) = first_var(&lookup, &["CHECK_DUPLICATES"]) {
            config.check_duplicates = parse_flag("CHECK_DUPLICATES", &flag)?;
        }

        config.validate()?;
        info!("Loaded proxy configuration: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_limit == 0 {
            anyhow::bail!("MAX_PAGE_LIMIT must be at least 1");
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            anyhow::bail!(
                "DEFAULT_PAGE_LIMIT must be between 1 and {} (got {})",
                self.max_limit,
                self.default_limit
            );
        }
        if self.max_pages == 0 {
            anyhow::bail!("MAX_PAGES must be at least 1");
        }
        Ok(())
    }

    /// Root of the Workable SPI, or `None` when no account is configured.
    pub fn api_base_url(&self) -> Option<String> {
        if let Some(base_url) = &self.base_url {
            return Some(base_url.clone());
        }
        if self.account.is_empty() {
            return None;
        }
        Some(format!("https://{}.{}/spi/v3", self.account, self.host))
    }

    pub fn token_present(&self) -> bool {
        !self.token.is_empty()
    }
}

impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("account", &self.account)
            .field("token", &if self.token_present() { "<redacted>" } else { "<missing>" })
            .field("host", &self.host)
            .field("base_url", &self.base_url)
            .field("port", &self.port)
            .field("timeout", &self.timeout)
            .field("page_delay", &self.page_delay)
            .field("default_limit", &self.default_limit)
            .field("max_limit", &self.max_limit)
            .field("max_pages", &self.max_pages)
            .field("check_duplicates", &self.check_duplicates)
            .finish()
    }
}

fn first_var<F>(lookup: &F, names: &[&str]) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .filter_map(|name| lookup(*name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>()
        .with_context(|| format!("{} has an invalid value: {}", name, raw))
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("{} must be a boolean (got {})", name, raw),
    }
}
