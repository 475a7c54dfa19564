// src/web/handlers/system_handlers.rs
use rocket::serde::json::Json;
use rocket::State;
use tracing::info;

use crate::config::ProxyConfig;
use crate::web::types::{DebugResponse, HealthResponse};

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "workable-proxy",
    })
}

pub async fn debug_handler(config: &State<ProxyConfig>) -> Json<DebugResponse> {
    info!("Debug info requested");
    Json(DebugResponse {
        token_exists: config.token_present(),
        subdomain: config.account.clone(),
        host: config.host.clone(),
    })
}
