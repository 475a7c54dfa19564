// src/core/duplicate_guard.rs
//! Best-effort duplicate check before creating a candidate.
//!
//! Fails open: if the existing candidates cannot be read, the submission is
//! treated as new. Only the first page Workable returns is inspected.

use tracing::{debug, warn};

use super::ats_client::AtsApi;
use crate::types::response::CandidatesEnvelope;

pub async fn is_duplicate(
    api: &dyn AtsApi,
    job: &str,
    email: Option<&str>,
    linkedin_url: Option<&str>,
) -> bool {
    if email.is_none() && linkedin_url.is_none() {
        return false;
    }

    let body = match api.list_candidates(job).await {
        Ok(body) => body,
        Err(e) => {
            warn!("Duplicate check failed for job {}, continuing: {}", job, e);
            return false;
        }
    };

    let envelope: CandidatesEnvelope = match serde_json::from_value(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("Unreadable candidate list for job {}, continuing: {}", job, e);
            return false;
        }
    };

    let duplicate = envelope
        .candidates
        .iter()
        .any(|candidate| candidate.matches(email, linkedin_url));

    debug!(
        "Checked {} existing candidates for job {}: duplicate={}",
        envelope.candidates.len(),
        job,
        duplicate
    );
    duplicate
}
