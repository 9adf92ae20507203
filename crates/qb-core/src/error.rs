//! Centralized error types for the query builder.

use thiserror::Error;

/// Main error type for query builder operations.
#[derive(Error, Debug)]
pub enum QbError {
    #[error("Cannot decode field '{field}': {reason}")]
    Decode { field: String, reason: String },

    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Upstream returned {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for query builder operations.
pub type QbResult<T> = Result<T, QbError>;

impl QbError {
    /// Create a decode error for the given field.
    pub fn decode(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an upstream transport error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }
}
