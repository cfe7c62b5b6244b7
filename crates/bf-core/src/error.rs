//! Error types for BasisFit

use thiserror::Error;

/// BasisFit error type
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation error: malformed configuration, fatal at construction time
    #[error("Validation error: {0}")]
    Validation(String),

    /// Domain error: call-time input outside the transform's domain
    #[error("Domain error: {0}")]
    Domain(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
