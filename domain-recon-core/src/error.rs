//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Reconnaissance core error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum ReconError {
    /// Input failed validation (never sent upstream)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Network transport failure or non-success upstream status
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Upstream payload could not be parsed
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias for reconnaissance operations
pub type ReconResult<T> = std::result::Result<T, ReconError>;
