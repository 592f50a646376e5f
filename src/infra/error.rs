//! Error types for the verification oracle.
//!
//! Malformed proof documents and unknown verification types are NOT errors:
//! they are business outcomes resolved to `verified=false` verdicts. Only
//! request validation and system faults (fetch, decode, internal) appear
//! here.

use thiserror::Error;

/// Errors that can occur while serving a verification request.
#[derive(Error, Debug)]
pub enum OracleError {
    /// Inbound request failed validation; raised before any fetch.
    #[error("invalid request: {field} {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Storage unreachable, identifier unresolvable, or fetch timed out.
    #[error("fetch failed for {cid}: {message}")]
    Fetch { cid: String, message: String },

    /// Retrieved bytes are not valid UTF-8 text.
    #[error("proof document {cid} is not valid UTF-8")]
    Decode { cid: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl OracleError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::Validation {
            field,
            message: "is required".to_string(),
        }
    }

    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn fetch(cid: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            cid: cid.into(),
            message: message.into(),
        }
    }

    /// Whether the external caller may retry this request unchanged.
    ///
    /// System faults are retryable; a validation failure will fail the same
    /// way every time until the request changes.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Validation { .. })
    }
}

/// Result type for oracle operations.
pub type Result<T> = std::result::Result<T, OracleError>;
