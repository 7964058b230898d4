//! Modrinth API error types
//!
//! Both variants are terminal for an aggregation pass.

use thiserror::Error;

/// Errors that can occur when talking to the Modrinth API
#[derive(Error, Debug)]
pub enum ModrinthError {
    /// Non-success HTTP status or transport failure
    #[error("API call failed: {0}")]
    RequestFailed(String),

    /// Body was not JSON, or lacked a required field
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ModrinthError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ModrinthError::MalformedResponse(e.to_string())
        } else {
            ModrinthError::RequestFailed(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ModrinthError {
    fn from(e: serde_json::Error) -> Self {
        ModrinthError::MalformedResponse(e.to_string())
    }
}

/// Result type for Modrinth operations
pub type ModrinthResult<T> = Result<T, ModrinthError>;
