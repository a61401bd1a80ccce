//! # hometracker_client
//!
//! HTTP client SDK for the HomeTracker backend: typed endpoint calls plus
//! the session manager that owns credentials, persistence and silent token
//! refresh.
//!
//! The [`ApiClient`] is the entry point. It carries a [`SessionManager`],
//! attaches the session's bearer token to credentialed requests, and retries
//! a rejected request once after refreshing the token pair.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use client::{ApiClient, ApiClientBuilder};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use session::{RefreshOutcome, SessionManager};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
