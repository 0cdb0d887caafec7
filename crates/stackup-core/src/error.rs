//! Unified error handling for stackup core.
//!
//! Wraps domain and application errors behind one type, with
//! user-actionable suggestions and a display category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for stackup core operations.
#[derive(Debug, Error, Clone)]
pub enum StackupError {
    /// Errors from the domain layer (invalid selections, broken plans).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, generators, output).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StackupError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in stackup".into(),
                "Please report this issue at: https://github.com/cosecruz/stackup/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    External,
    Internal,
}

/// Convenient result type alias.
pub type StackupResult<T> = Result<T, StackupError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> StackupResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> StackupResult<T> {
        self.map_err(|e| StackupError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_categories_map_through() {
        let err: StackupError = DomainError::EmptyProjectName.into();
        assert_eq!(err.category(), ErrorCategory::Validation);

        let err: StackupError = DomainError::UnknownChoice {
            tier: "api",
            value: "rails".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn generator_failure_is_external() {
        let err: StackupError = ApplicationError::GeneratorFailed {
            package: "create-react-app my-react-app".into(),
            reason: "exit status 1".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::External);
        assert!(err.to_string().contains("create-react-app"));
    }

    #[test]
    fn context_wraps_as_internal() {
        let res: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        let err = res.context("reading config").unwrap_err();
        assert!(matches!(err, StackupError::Internal { .. }));
        assert!(err.to_string().contains("reading config: boom"));

        let fs: StackupError = ApplicationError::FilesystemError {
            path: PathBuf::from("db"),
            reason: "exists".into(),
        }
        .into();
        assert_eq!(fs.category(), ErrorCategory::Internal);
    }
}
