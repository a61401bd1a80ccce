//! # hometracker_core
//!
//! Session domain model for HomeTracker clients.

pub mod models;
pub mod session;
pub mod store;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
