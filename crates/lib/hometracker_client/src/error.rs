//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

use hometracker_core::store::StoreError;

/// Convenience alias for client results.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the API client and session manager.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend rejected the request. Carries the HTTP status and the
    /// backend's human-readable message. Also used for 2xx responses that
    /// report `success: false` in the body.
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// Transport failure: connect, timeout, or body decode.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Session persistence failure.
    #[error("session store: {0}")]
    Store(#[from] StoreError),

    /// The client cannot be constructed from the given configuration.
    #[error("configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// True for an authorization rejection (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}
