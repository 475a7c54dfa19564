// src/core/job_walker.rs
//! Translates caller page numbers into Workable's forward-only cursor chain.
//! Every request walks from the first page; nothing is cached between calls.

use std::time::Duration;
use tracing::{debug, info};

use super::ats_client::{AtsApi, JobsPageRequest};
use crate::error::UpstreamError;
use crate::types::response::{next_cursor_of, JobsEnvelope};
use crate::types::{JobCollection, JobPage, StateFilter};

pub struct JobWalker<'a> {
    api: &'a dyn AtsApi,
    page_delay: Duration,
    max_pages: u32,
}

impl<'a> JobWalker<'a> {
    pub fn new(api: &'a dyn AtsApi, page_delay: Duration, max_pages: u32) -> Self {
        Self {
            api,
            page_delay,
            max_pages,
        }
    }

    /// Fetch logical page `requested_page` (1-based) of `limit` jobs.
    ///
    /// Makes exactly `requested_page` sequential calls when the chain is long
    /// enough. If the chain ends first, the result is an empty page with
    /// `has_more = false` rather than an error. An unreadable page on the way
    /// is an error, never an end of chain.
    pub async fn list_jobs(
        &self,
        state: &StateFilter,
        requested_page: u32,
        limit: u32,
    ) -> Result<JobPage, UpstreamError> {
        let requested_page = requested_page.max(1);
        let mut request = JobsPageRequest::First {
            limit,
            state: state.clone(),
        };
        let mut current = 1;

        loop {
            debug!("Fetching jobs page {} of {}", current, requested_page);
            let body = self.api.list_jobs_page(&request).await?;

            if current == requested_page {
                let envelope = JobsEnvelope::from_body(body)?;
                let cursor = envelope.next_cursor();
                return Ok(JobPage::new(requested_page, limit, envelope.jobs, cursor));
            }

            let Some(next) = next_cursor_of(&body)? else {
                info!(
                    "Jobs chain ended at page {}, page {} is past the end",
                    current, requested_page
                );
                return Ok(JobPage::past_end(requested_page, limit));
            };

            request = JobsPageRequest::Next(next);
            current += 1;
            self.pause().await;
        }
    }

    /// Follow the chain to its end and collect every job.
    pub async fn list_all_jobs(
        &self,
        state: &StateFilter,
        limit: u32,
    ) -> Result<JobCollection, UpstreamError> {
        let mut request = JobsPageRequest::First {
            limit,
            state: state.clone(),
        };
        let mut jobs = Vec::new();
        let mut fetched = 0;

        loop {
            if fetched == self.max_pages {
                return Err(UpstreamError::PageLimit(self.max_pages));
            }

            let envelope = JobsEnvelope::from_body(self.api.list_jobs_page(&request).await?)?;
            fetched += 1;

            let next = envelope.next_cursor();
            jobs.extend(envelope.jobs);

            match next {
                Some(cursor) => {
                    request = JobsPageRequest::Next(cursor);
                    self.pause().await;
                }
                None => break,
            }
        }

        info!("Collected {} jobs across {} pages", jobs.len(), fetched);
        Ok(JobCollection::new(state, jobs))
    }

    async fn pause(&self) {
        if !self.page_delay.is_zero() {
            tokio::time::sleep(self.page_delay).await;
        }
    }
}
