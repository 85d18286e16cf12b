//! Error types for policy compilation
//!
//! This module defines the errors that can abort a compile call. All of
//! them are invalid-argument failures: compilation is pure, so retrying
//! with the same input cannot succeed. A malformed grant aborts the whole
//! request rather than producing a partial policy.

use thiserror::Error;

/// Policy compilation error types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// The configured bucket identifier is empty
    #[error("Bucket identifier is empty")]
    EmptyBucket,

    /// The username cannot anchor a private namespace prefix
    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    /// The workspace name cannot be mapped to a safe key prefix
    #[error("Invalid workspace name: {0:?}")]
    InvalidWorkspaceName(String),
}

/// Result type for policy compilation operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

impl PolicyError {
    /// Get error code for API responses.
    pub fn error_code(&self) -> &'static str {
        match self {
            PolicyError::EmptyBucket => "EMPTY_BUCKET",
            PolicyError::InvalidUsername(_) => "INVALID_USERNAME",
            PolicyError::InvalidWorkspaceName(_) => "INVALID_WORKSPACE_NAME",
        }
    }
}
