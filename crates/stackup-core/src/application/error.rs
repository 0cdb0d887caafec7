//! Application layer errors.
//!
//! These errors represent failures while executing a plan, not business
//! logic. Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external generator exited unsuccessfully or could not start.
    #[error("Generator '{package}' failed: {reason}")]
    GeneratorFailed { package: String, reason: String },

    /// The command that must run before a generator failed.
    #[error("Prerequisite '{command}' failed: {reason}")]
    PrerequisiteFailed { command: String, reason: String },

    /// The composition document could not be rendered.
    #[error("Failed to serialize composition: {reason}")]
    SerializationFailed { reason: String },

    /// In-memory state lock was poisoned.
    #[error("Internal store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run in an empty directory, or pass --clear".into(),
            ],
            Self::GeneratorFailed { package, .. } => vec![
                format!("Try running it by hand: npx -y {}", package),
                "Check that node and npx are installed and on PATH".into(),
                "Check your network connection".into(),
            ],
            Self::PrerequisiteFailed { command, .. } => vec![
                format!("Try running it by hand: {}", command),
                "Global npm installs may need elevated permissions".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            Self::SerializationFailed { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
            Self::SerializationFailed { .. } => ErrorCategory::Internal,
            Self::GeneratorFailed { .. } | Self::PrerequisiteFailed { .. } => {
                ErrorCategory::External
            }
        }
    }
}
