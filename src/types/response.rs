// src/types/response.rs
//! Workable response envelopes.

use serde::Deserialize;
use serde_json::Value;

use crate::error::UpstreamError;
use crate::types::candidate::ExistingCandidate;
use crate::types::job::{Cursor, Job};

#[derive(Debug, Default, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<String>,
}

/// `GET /jobs` page: `{jobs: [...], paging: {next}}`
#[derive(Debug, Deserialize)]
pub struct JobsEnvelope {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl JobsEnvelope {
    pub fn from_body(body: Value) -> Result<Self, UpstreamError> {
        if !body.is_object() {
            return Err(UpstreamError::Malformed(format!(
                "expected a jobs object, got {}",
                body
            )));
        }
        serde_json::from_value(body)
            .map_err(|e| UpstreamError::Malformed(format!("jobs page: {}", e)))
    }

    pub fn next_cursor(&self) -> Option<Cursor> {
        Cursor::from_upstream(self.paging.as_ref().and_then(|p| p.next.clone()))
    }
}

/// Reads only `paging.next`, for pages whose jobs are thrown away anyway.
/// `Ok(None)` means the chain really ended: a jobs object whose `paging.next`
/// is null or absent. Anything else that is not a cursor is malformed.
pub fn next_cursor_of(body: &Value) -> Result<Option<Cursor>, UpstreamError> {
    if !body.is_object() {
        return Err(UpstreamError::Malformed(format!(
            "expected a jobs object, got {}",
            body
        )));
    }
    match body.pointer("/paging/next") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(next)) => Ok(Cursor::from_upstream(Some(next.clone()))),
        Some(other) => Err(UpstreamError::Malformed(format!(
            "paging.next is not a string: {}",
            other
        ))),
    }
}

/// `GET /jobs/{job}/candidates`: `{candidates: [...]}`
#[derive(Debug, Default, Deserialize)]
pub struct CandidatesEnvelope {
    #[serde(default)]
    pub candidates: Vec<ExistingCandidate>,
}

/// Workable wraps the created record as `{candidate: {...}}`; hand back the
/// record itself when it does, the whole body otherwise.
pub fn created_candidate(body: Value) -> Value {
    match body {
        Value::Object(mut envelope) if envelope.contains_key("candidate") => envelope
            .remove("candidate")
            .unwrap_or(Value::Null),
        other => other,
    }
}
