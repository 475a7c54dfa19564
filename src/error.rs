// src/error.rs
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Failure while talking to the Workable API.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Workable returned HTTP {status}")]
    Status { status: u16, body: Value },

    #[error("Workable request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Workable request failed: {0}")]
    Transport(String),

    #[error("Unexpected Workable response: {0}")]
    Malformed(String),

    #[error("Workable pagination exceeded {0} pages")]
    PageLimit(u32),

    #[error("Workable is not configured: {0} is missing")]
    NotConfigured(&'static str),

    #[error("Workable base URL is invalid: {0}")]
    InvalidBaseUrl(String),
}

impl UpstreamError {
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// What the caller sees as `error`: Workable's own body when it sent one,
    /// otherwise our description of the failure.
    pub fn caller_body(&self) -> Value {
        match self {
            UpstreamError::Status { body, .. } if !is_blank(body) => body.clone(),
            other => Value::String(other.to_string()),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UpstreamError::Status { .. } => "UPSTREAM_ERROR",
            UpstreamError::Timeout(_) => "UPSTREAM_TIMEOUT",
            UpstreamError::Transport(_) => "UPSTREAM_UNREACHABLE",
            UpstreamError::Malformed(_) => "UPSTREAM_MALFORMED",
            UpstreamError::PageLimit(_) => "UPSTREAM_PAGE_LIMIT",
            UpstreamError::NotConfigured(_) | UpstreamError::InvalidBaseUrl(_) => {
                "UPSTREAM_NOT_CONFIGURED"
            }
        }
    }
}

fn is_blank(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// Why a request was refused before (or instead of) creating anything upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("jobId or jobShortcode is required")]
    MissingJobIdentifier,

    #[error("email or linkedin_url is required")]
    MissingContactIdentifier,

    #[error("Candidate already exists")]
    DuplicateCandidate,

    #[error("Request body must be a JSON object")]
    MalformedBody,

    #[error("page must not exceed {0}")]
    PageBeyondLimit(u32),
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::MissingJobIdentifier => "MISSING_JOB_IDENTIFIER",
            RejectionReason::MissingContactIdentifier => "MISSING_CONTACT_IDENTIFIER",
            RejectionReason::DuplicateCandidate => "DUPLICATE_CANDIDATE",
            RejectionReason::MalformedBody => "BAD_REQUEST",
            RejectionReason::PageBeyondLimit(_) => "PAGE_OUT_OF_RANGE",
        }
    }
}

/// Everything a proxy operation can fail with; rendered by the web layer.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
