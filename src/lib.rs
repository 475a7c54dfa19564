// src/lib.rs
//! Workable proxy: a small rocket server that fronts the Workable ATS API so a
//! browser extension can list jobs and push candidates without holding the
//! account token itself.

pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;
pub mod web;

pub use config::ProxyConfig;
pub use crate::core::{AtsApi, ProxyService, WorkableClient};
pub use error::{ProxyError, RejectionReason, UpstreamError};
pub use web::{build_rocket, start_web_server};
