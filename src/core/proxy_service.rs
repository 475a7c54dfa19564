// src/core/proxy_service.rs
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use super::ats_client::AtsApi;
use super::duplicate_guard::is_duplicate;
use super::job_walker::JobWalker;
use crate::config::ProxyConfig;
use crate::error::{ProxyError, RejectionReason};
use crate::types::response::created_candidate;
use crate::types::{CandidateSubmission, JobCollection, JobPage, StateFilter};
use crate::utils::{clamp_limit, clamp_page};

/// The two proxy operations, shared read-only by every request.
pub struct ProxyService {
    api: Arc<dyn AtsApi>,
    page_delay: Duration,
    max_pages: u32,
    default_limit: u32,
    max_limit: u32,
    check_duplicates: bool,
}

impl ProxyService {
    pub fn new(api: Arc<dyn AtsApi>, config: &ProxyConfig) -> Self {
        Self {
            api,
            page_delay: config.page_delay,
            max_pages: config.max_pages,
            default_limit: config.default_limit,
            max_limit: config.max_limit,
            check_duplicates: config.check_duplicates,
        }
    }

    fn walker(&self) -> JobWalker<'_> {
        JobWalker::new(self.api.as_ref(), self.page_delay, self.max_pages)
    }

    pub async fn list_jobs(
        &self,
        state: Option<&str>,
        page: Option<i64>,
        limit: Option<i64>,
    ) -> Result<JobPage, ProxyError> {
        let state = StateFilter::from_query(state);
        let page = clamp_page(page);
        let limit = clamp_limit(limit, self.default_limit, self.max_limit);
        // each page costs one upstream fetch
        if page > self.max_pages {
            return Err(RejectionReason::PageBeyondLimit(self.max_pages).into());
        }

        info!("Listing jobs: state={} page={} limit={}", state.label(), page, limit);
        Ok(self.walker().list_jobs(&state, page, limit).await?)
    }

    pub async fn list_all_jobs(
        &self,
        state: Option<&str>,
        limit: Option<i64>,
    ) -> Result<JobCollection, ProxyError> {
        let state = StateFilter::from_query(state);
        let limit = clamp_limit(limit, self.default_limit, self.max_limit);

        info!("Listing all jobs: state={} limit={}", state.label(), limit);
        Ok(self.walker().list_all_jobs(&state, limit).await?)
    }

    /// Validate, optionally check for duplicates, then create the candidate.
    /// Returns the created candidate record.
    pub async fn add_candidate(&self, raw: &Value) -> Result<Value, ProxyError> {
        let submission = CandidateSubmission::from_json(raw)?;
        let job = submission.job_identifier.as_str();

        if self.check_duplicates
            && is_duplicate(
                self.api.as_ref(),
                job,
                submission.email.as_deref(),
                submission.linkedin_url.as_deref(),
            )
            .await
        {
            info!("Rejected duplicate candidate for job {}", job);
            return Err(RejectionReason::DuplicateCandidate.into());
        }

        let body = self
            .api
            .create_candidate(job, &submission.to_payload())
            .await?;

        info!("Created candidate for job {}", job);
        Ok(created_candidate(body))
    }
}
