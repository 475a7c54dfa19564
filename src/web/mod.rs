// src/web/mod.rs
//! Route wrappers over `ProxyService` and the rocket builder.

pub mod cors_utils;
pub mod handlers;
pub mod types;

pub use cors_utils::Cors;
pub use types::*;

use crate::config::ProxyConfig;
use crate::core::{AtsApi, ProxyService};
use crate::error::ProxyError;
use crate::types::{JobCollection, JobPage};
use anyhow::Result;
use rocket::serde::json::{self, Json, Value};
use rocket::{catchers, get, post, routes, Build, Request, Rocket, State};
use std::sync::Arc;
use tracing::{info, warn};

#[get("/")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[get("/jobs?<state>&<page>&<limit>")]
pub async fn list_jobs(
    state: Option<String>,
    page: Option<i64>,
    limit: Option<i64>,
    service: &State<ProxyService>,
) -> Result<Json<JobPage>, ProxyError> {
    handlers::list_jobs_handler(state, page, limit, service).await
}

#[get("/jobs/all?<state>&<limit>")]
pub async fn list_all_jobs(
    state: Option<String>,
    limit: Option<i64>,
    service: &State<ProxyService>,
) -> Result<Json<JobCollection>, ProxyError> {
    handlers::list_all_jobs_handler(state, limit, service).await
}

#[post("/add-candidate", data = "<body>")]
pub async fn add_candidate(
    body: Result<Json<Value>, json::Error<'_>>,
    service: &State<ProxyService>,
) -> Result<Json<CandidateCreatedResponse>, ProxyError> {
    handlers::add_candidate_handler(body, service).await
}

#[get("/debug")]
pub async fn debug(config: &State<ProxyConfig>) -> Json<DebugResponse> {
    handlers::debug_handler(config).await
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Not found", "NOT_FOUND"))
}

#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format", "BAD_REQUEST"))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request format", "BAD_REQUEST"))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Internal server error", "INTERNAL_ERROR"))
}

#[rocket::catch(default)]
pub fn default_catcher(status: rocket::http::Status, request: &Request<'_>) -> Json<ErrorResponse> {
    warn!("Unhandled {} for {} {}", status, request.method(), request.uri());
    Json(ErrorResponse::new(
        status.reason().unwrap_or("Request failed"),
        "REQUEST_FAILED",
    ))
}

/// Assemble the server around an upstream client. Tests pass a fake `AtsApi`.
pub fn build_rocket(config: ProxyConfig, api: Arc<dyn AtsApi>) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", config.port))
        .merge(("log_level", "critical"));

    let service = ProxyService::new(api, &config);

    rocket::custom(figment)
        .attach(Cors)
        .manage(service)
        .manage(config)
        .register(
            "/",
            catchers![
                not_found,
                bad_request,
                unprocessable,
                internal_error,
                default_catcher
            ],
        )
        .mount(
            "/",
            routes![
                health,
                list_jobs,
                list_all_jobs,
                add_candidate,
                debug,
                cors_utils::universal_options_handler,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: ProxyConfig, api: Arc<dyn AtsApi>) -> Result<()> {
    if !config.token_present() {
        warn!("WORKABLE_TOKEN is not set; Workable calls will be rejected upstream");
    }
    if config.api_base_url().is_none() {
        warn!("WORKABLE_SUBDOMAIN is not set; Workable calls will fail until it is");
    }

    info!("Starting Workable proxy on http://0.0.0.0:{}", config.port);

    build_rocket(config, api)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
