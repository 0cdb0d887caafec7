// ============================================================================
// domain/error.rs - SELECTION AND PLAN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so callers can keep a copy while reporting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown {tier} choice: '{value}'")]
    UnknownChoice { tier: &'static str, value: String },

    #[error("Database credentials were given but no database is selected")]
    UnexpectedCredentials,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    // ========================================================================
    // Plan Invariants
    // ========================================================================
    #[error("Duplicate path in scaffold plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyProjectName => vec![
                "Give the project a name".into(),
                "Example: stackup new --name my-project".into(),
            ],
            Self::InvalidProjectName { name, .. } => vec![
                format!("'{}' cannot be used in image and container names", name),
                "Use lowercase letters, digits, '-', '_' and '.'".into(),
                "Start with a letter or a digit".into(),
            ],
            Self::UnknownChoice { tier, .. } => vec![
                format!("Pick one of the supported {} choices", tier),
                "Try: stackup list".into(),
            ],
            Self::UnexpectedCredentials => vec![
                "Select a database (mysql or postgresql) to use credentials".into(),
                "Or drop the --db-* flags".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyProjectName
            | Self::InvalidProjectName { .. }
            | Self::UnexpectedCredentials
            | Self::InvalidSelection(_) => ErrorCategory::Validation,
            Self::UnknownChoice { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
