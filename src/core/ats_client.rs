// src/core/ats_client.rs
//! Workable SPI v3 client. Bearer-authenticated, one explicit timeout per call,
//! bodies parsed as JSON when possible and passed through as text otherwise.

use anyhow::{Context, Result};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, trace};

use crate::config::ProxyConfig;
use crate::error::UpstreamError;
use crate::types::{CreateCandidateRequest, Cursor, StateFilter};

const JOBS_ENDPOINT: &str = "jobs";
const CANDIDATES_ENDPOINT: &str = "candidates";

/// What to fetch for one jobs page: the filtered first page, or a cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum JobsPageRequest {
    First { limit: u32, state: StateFilter },
    Next(Cursor),
}

/// The three Workable calls the proxy makes. Every non-2xx answer comes back
/// as `UpstreamError::Status` carrying Workable's body.
#[rocket::async_trait]
pub trait AtsApi: Send + Sync {
    async fn list_jobs_page(&self, request: &JobsPageRequest) -> Result<Value, UpstreamError>;

    async fn list_candidates(&self, job: &str) -> Result<Value, UpstreamError>;

    async fn create_candidate(
        &self,
        job: &str,
        payload: &CreateCandidateRequest,
    ) -> Result<Value, UpstreamError>;
}

pub struct WorkableClient {
    client: reqwest::Client,
    base_url: Option<String>,
    token: String,
    timeout: Duration,
}

impl WorkableClient {
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url(),
            token: config.token.clone(),
            timeout: config.timeout,
        })
    }

    fn base(&self) -> Result<Url, UpstreamError> {
        let base_url = self
            .base_url
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("WORKABLE_SUBDOMAIN"))?;
        Url::parse(base_url)
            .map_err(|e| UpstreamError::InvalidBaseUrl(format!("{}: {}", base_url, e)))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = self.base()?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidBaseUrl("it cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// First jobs page: `/jobs?limit=N[&state=S]`
    pub fn jobs_url(&self, limit: u32, state: &StateFilter) -> Result<Url, UpstreamError> {
        let mut url = self.endpoint(&[JOBS_ENDPOINT])?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("limit", &limit.to_string());
            if let Some(state) = state.query_value() {
                query.append_pair("state", state);
            }
        }
        Ok(url)
    }

    /// `/jobs/{job}/candidates`, with the job identifier percent-encoded
    pub fn candidates_url(&self, job: &str) -> Result<Url, UpstreamError> {
        self.endpoint(&[JOBS_ENDPOINT, job, CANDIDATES_ENDPOINT])
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, UpstreamError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        trace!("Workable response status: {}", status);

        let text = response.text().await.map_err(|e| self.transport_error(e))?;
        let body = parse_body(text);

        if status.is_success() {
            Ok(body)
        } else {
            error!("Workable error response {}: {}", status, body);
            Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> UpstreamError {
        if e.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

#[rocket::async_trait]
impl AtsApi for WorkableClient {
    async fn list_jobs_page(&self, request: &JobsPageRequest) -> Result<Value, UpstreamError> {
        let url = match request {
            JobsPageRequest::First { limit, state } => self.jobs_url(*limit, state)?,
            JobsPageRequest::Next(cursor) => Url::parse(cursor.as_str()).map_err(|e| {
                UpstreamError::Malformed(format!("paging.next is not a URL: {}", e))
            })?,
        };

        info!("Fetching Workable jobs page: {}", url);
        self.send(self.client.get(url)).await
    }

    async fn list_candidates(&self, job: &str) -> Result<Value, UpstreamError> {
        let url = self.candidates_url(job)?;
        info!("Listing Workable candidates: {}", url);
        self.send(self.client.get(url)).await
    }

    async fn create_candidate(
        &self,
        job: &str,
        payload: &CreateCandidateRequest,
    ) -> Result<Value, UpstreamError> {
        let url = self.candidates_url(job)?;
        info!("Creating Workable candidate: {}", url);
        self.send(self.client.post(url).json(payload)).await
    }
}

/// JSON when it parses, the raw text otherwise; empty bodies become `null`.
pub fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
