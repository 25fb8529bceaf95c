//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A model document could not be read or parsed.
    #[error("Failed to load model {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    /// The document's extension has no reader.
    #[error("Unsupported model format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// No model document at the given location.
    #[error("Model not found: {path}")]
    ModelNotFound { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory store access failed (lock poisoned, etc.).
    #[error("Filesystem store error")]
    StoreLockError,

    /// Output file already exists and overwrite was not requested.
    #[error("Output already exists at {path}")]
    OutputExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ModelLoad { path, .. } => vec![
                format!("Check the syntax of {}", path.display()),
                "Fields need a 'name' and a 'type'; validations need a 'name'".into(),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Model documents must be .toml or .json files".into(),
            ],
            Self::ModelNotFound { path } => vec![
                format!("No such file or directory: {}", path.display()),
                "Check the path and try again".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::StoreLockError => vec![
                "The in-memory filesystem is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
                "Choose a different output path with -o".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelLoad { .. } | Self::UnsupportedFormat { .. } => ErrorCategory::Validation,
            Self::ModelNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::OutputExists { .. } => ErrorCategory::Validation,
        }
    }
}
