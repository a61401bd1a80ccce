//! Command implementations.

pub mod account;
pub mod auth;
pub mod diagnostics;

use std::io::{self, Write};

use crate::{Error, Result};

/// Use the flag value when given, otherwise prompt on stdin.
pub(crate) fn resolve_secret(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let value = line.trim_end_matches(['\r', '\n']);
    if value.is_empty() {
        return Err(Error::Custom("no input provided".into()));
    }
    Ok(value.to_string())
}
