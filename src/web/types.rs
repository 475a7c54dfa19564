// src/web/types.rs
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::{Json, Value};
use rocket::serde::Serialize;
use rocket::Request;
use tracing::error;

use crate::error::{ProxyError, RejectionReason, UpstreamError};

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct CandidateCreatedResponse {
    pub success: bool,
    pub result: Value,
}

/// Reports whether credentials are configured, never the credentials.
#[derive(Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct DebugResponse {
    pub token_exists: bool,
    pub subdomain: String,
    pub host: String,
}

#[derive(Debug, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: Value,
    pub error_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, error_code: &str) -> Self {
        Self {
            success: false,
            error: Value::String(error.into()),
            error_code: error_code.to_string(),
            upstream_status: None,
        }
    }

    pub fn rejected(reason: &RejectionReason) -> Self {
        Self::new(reason.to_string(), reason.code())
    }

    pub fn upstream(err: &UpstreamError) -> Self {
        Self {
            success: false,
            error: err.caller_body(),
            error_code: err.code().to_string(),
            upstream_status: err.upstream_status(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ProxyError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let (status, body) = match &self {
            ProxyError::Rejected(reason) => (Status::BadRequest, ErrorResponse::rejected(reason)),
            ProxyError::Upstream(err) => {
                error!("{} {} failed: {}", request.method(), request.uri(), err);
                (Status::InternalServerError, ErrorResponse::upstream(err))
            }
        };
        (status, Json(body)).respond_to(request)
    }
}
