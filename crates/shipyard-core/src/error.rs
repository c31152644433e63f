// Rust guideline compliant 2026-10-12

//! Error types for the Shipyard core library.

use thiserror::Error;

/// Result type alias for Shipyard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Shipyard operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field failed validation, a required field was missing, or a
    /// query parameter was out of its domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No ship exists with the given identifier.
    #[error("Ship not found: {0}")]
    NotFound(u64),

    /// Configuration file or environment override could not be applied.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Builds an `InvalidArgument` error naming the rejected field.
    pub fn invalid_field(field: &str, reason: impl std::fmt::Display) -> Self {
        Error::InvalidArgument(format!("{field}: {reason}"))
    }
}
