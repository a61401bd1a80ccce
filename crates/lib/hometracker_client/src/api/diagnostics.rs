//! Backend diagnostics.
//!
//! `/health` and `/metrics` live at the server root, outside the versioned
//! API prefix, and are unauthenticated. Their payloads vary by deployment,
//! so they are passed through as raw JSON.

use crate::client::{ApiClient, Auth};
use crate::error::Result;

impl ApiClient {
    /// `GET /health` at the server root.
    pub async fn health(&self) -> Result<serde_json::Value> {
        self.get_json(&self.root_url("/health"), Auth::None).await
    }

    /// `GET /metrics` at the server root.
    pub async fn metrics(&self) -> Result<serde_json::Value> {
        self.get_json(&self.root_url("/metrics"), Auth::None).await
    }
}
