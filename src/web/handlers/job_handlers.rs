// src/web/handlers/job_handlers.rs
use rocket::serde::json::Json;
use rocket::State;

use crate::core::ProxyService;
use crate::error::ProxyError;
use crate::types::{JobCollection, JobPage};

pub async fn list_jobs_handler(
    state: Option<String>,
    page: Option<i64>,
    limit: Option<i64>,
    service: &State<ProxyService>,
) -> Result<Json<JobPage>, ProxyError> {
    service
        .list_jobs(state.as_deref(), page, limit)
        .await
        .map(Json)
}

pub async fn list_all_jobs_handler(
    state: Option<String>,
    limit: Option<i64>,
    service: &State<ProxyService>,
) -> Result<Json<JobCollection>, ProxyError> {
    service
        .list_all_jobs(state.as_deref(), limit)
        .await
        .map(Json)
}
