// src/web/handlers/candidate_handlers.rs
use rocket::serde::json::{self, Json, Value};
use rocket::State;
use tracing::warn;

use crate::core::ProxyService;
use crate::error::{ProxyError, RejectionReason};
use crate::web::types::CandidateCreatedResponse;

pub async fn add_candidate_handler(
    body: Result<Json<Value>, json::Error<'_>>,
    service: &State<ProxyService>,
) -> Result<Json<CandidateCreatedResponse>, ProxyError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(e) => {
            warn!("Rejected unreadable candidate body: {}", e);
            return Err(RejectionReason::MalformedBody.into());
        }
    };

    let result = service.add_candidate(&body).await?;

    Ok(Json(CandidateCreatedResponse {
        success: true,
        result,
    }))
}
