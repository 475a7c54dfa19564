// src/core/mod.rs
//! Upstream client, pagination walker, submission normalizer and duplicate guard

pub mod ats_client;
pub mod duplicate_guard;
pub mod job_walker;
pub mod proxy_service;
pub mod submission;

#[cfg(test)]
pub(crate) mod testing;

pub use ats_client::{AtsApi, JobsPageRequest, WorkableClient};
pub use duplicate_guard::is_duplicate;
pub use job_walker::JobWalker;
pub use proxy_service::ProxyService;
