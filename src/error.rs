//! Error types for the pollenfield engines.
//!
//! Every engine-level failure is raised to the immediate caller. Nothing in
//! the core retries: the computations are deterministic, so a failure for a
//! given input will fail the same way again.

use thiserror::Error;

/// The main error type for pollenfield operations.
#[derive(Error, Debug)]
pub enum PollenError {
    /// Bad method-specific tuning values or grid bounds
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Unrecognised smoothing or interpolation method token
    #[error("Unknown {kind} method: {name}")]
    UnknownMethod { kind: String, name: String },

    /// No usable sample points for a frame
    #[error("Insufficient data: {message}")]
    InsufficientData { message: String },

    /// Points cannot support a triangulation or a well-posed fit
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Malformed input records
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PollenError {
    pub(crate) fn invalid_parameter(param: &str, message: impl Into<String>) -> Self {
        PollenError::InvalidParameter {
            param: param.to_string(),
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with PollenError
pub type Result<T> = std::result::Result<T, PollenError>;
