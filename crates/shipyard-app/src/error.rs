// Rust guideline compliant 2026-10-12

//! Error handling for Shipyard application services.

use serde::Serialize;
use shipyard_core::Error as CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes a front end maps to its own responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested ship was not found.
    NotFound,
    /// A field, a required field, or a query parameter was invalid.
    InvalidArgument,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure while reading or writing ship data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The repository has not been initialized.
    RepoNotInitialized,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Shipyard repository not initialized at {path}. Run 'shipyard init' first.")]
    RepoNotInitialized {
        /// Path where `.shipyard` was expected.
        path: PathBuf,
    },

    /// Invalid argument was provided by the caller.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Builds an `InvalidArgument` error naming the rejected field.
    pub fn invalid_field(field: &str, reason: impl std::fmt::Display) -> Self {
        AppError::InvalidArgument(format!("{field}: {reason}"))
    }

    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidArgument(_) => ErrorCode::InvalidArgument,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
            })),
            _ => None,
        }
    }
}
