//! Typed endpoint calls, grouped by backend area.

pub mod account;
pub mod auth;
pub mod diagnostics;
