// src/core/testing.rs
//! Scripted `AtsApi` for unit tests.

use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

use super::ats_client::{AtsApi, JobsPageRequest};
use crate::error::UpstreamError;
use crate::types::CreateCandidateRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    JobsPage(JobsPageRequest),
    ListCandidates(String),
    CreateCandidate(String, Value),
}

#[derive(Default)]
pub struct ScriptedAts {
    pages: Mutex<VecDeque<Result<Value, UpstreamError>>>,
    candidates: Mutex<Option<Result<Value, UpstreamError>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedAts {
    pub fn with_pages(pages: Vec<Result<Value, UpstreamError>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            ..Self::default()
        }
    }

    /// A chain of `count` pages, each holding one job, linked by cursors.
    pub fn with_chain(count: usize) -> Self {
        Self::with_pages((1..=count).map(|n| Ok(page_body(n, count))).collect())
    }

    pub fn with_candidates(candidates: Result<Value, UpstreamError>) -> Self {
        Self {
            candidates: Mutex::new(Some(candidates)),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn jobs_page_calls(&self) -> Vec<JobsPageRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::JobsPage(request) => Some(request),
                _ => None,
            })
            .collect()
    }
}

pub fn page_body(n: usize, count: usize) -> Value {
    let next = if n < count {
        json!(format!("https://acme.workable.com/spi/v3/jobs?limit=1&since_id={}", n))
    } else {
        Value::Null
    };
    json!({
        "jobs": [{"id": format!("job-{}", n), "title": format!("Job {}", n), "state": "published"}],
        "paging": {"next": next}
    })
}

#[rocket::async_trait]
impl AtsApi for ScriptedAts {
    async fn list_jobs_page(&self, request: &JobsPageRequest) -> Result<Value, UpstreamError> {
        self.calls.lock().unwrap().push(Call::JobsPage(request.clone()));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(UpstreamError::Transport("script exhausted".to_string())))
    }

    async fn list_candidates(&self, job: &str) -> Result<Value, UpstreamError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::ListCandidates(job.to_string()));
        self.candidates
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(json!({"candidates": []})))
    }

    async fn create_candidate(
        &self,
        job: &str,
        payload: &CreateCandidateRequest,
    ) -> Result<Value, UpstreamError> {
        let payload = serde_json::to_value(payload).unwrap();
        self.calls
            .lock()
            .unwrap()
            .push(Call::CreateCandidate(job.to_string(), payload.clone()));
        Ok(json!({"candidate": {"id": "c-1", "email": payload["candidate"]["email"]}}))
    }
}
