//! Error types for the reset client.

use thiserror::Error;

/// Result type for reset client operations.
pub type Result<T> = std::result::Result<T, ResetError>;

/// Reset client errors.
#[derive(Debug, Error)]
pub enum ResetError {
    /// Configuration error (invalid base URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport error (connection refused, DNS failure, timeout)
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response. The body is kept for logging only.
    #[error("HTTP {}", status_line(.status))]
    Status { status: u16, body: String },

    /// Response body is not a valid service response
    #[error("invalid response body: {0}")]
    Decode(String),
}

fn status_line(code: &u16) -> String {
    match reqwest::StatusCode::from_u16(*code)
        .ok()
        .and_then(|s| s.canonical_reason())
    {
        Some(reason) => format!("{} {}", code, reason),
        None => code.to_string(),
    }
}

impl From<reqwest::Error> for ResetError {
    fn from(err: reqwest::Error) -> Self {
        ResetError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ResetError {
    fn from(err: serde_json::Error) -> Self {
        ResetError::Decode(err.to_string())
    }
}
