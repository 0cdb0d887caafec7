//! The `Selection` aggregate root and its builder.
//!
//! A `Selection` is the fully-validated answer set the wizard (or the CLI
//! flags) produced. Once a `Selection` exists it is guaranteed consistent:
//! the project name is usable in image names, and credentials are present
//! exactly when a database is selected.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{ApiKind, DatabaseKind, FrontBackKind},
};

/// Project name used when the user accepts the default.
pub const DEFAULT_PROJECT_NAME: &str = "my-project";

// ── Credentials ───────────────────────────────────────────────────────────────

/// Database credentials copied verbatim into the `db` service environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseCredentials {
    pub name: String,
    pub user: String,
    pub password: String,
    pub root_password: String,
}

impl DatabaseCredentials {
    pub const DEFAULT_NAME: &'static str = "my-database";
    pub const DEFAULT_USER: &'static str = "my-user";
    pub const DEFAULT_PASSWORD: &'static str = "my-password";
    pub const DEFAULT_ROOT_PASSWORD: &'static str = "my-root-password";

    pub fn new(
        name: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        root_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            user: user.into(),
            password: password.into(),
            root_password: root_password.into(),
        }
    }
}

impl Default for DatabaseCredentials {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_NAME,
            Self::DEFAULT_USER,
            Self::DEFAULT_PASSWORD,
            Self::DEFAULT_ROOT_PASSWORD,
        )
    }
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A validated stack selection.
///
/// Invariant: `credentials.is_some() == !database.is_none()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    project_name: String,
    database: DatabaseKind,
    credentials: Option<DatabaseCredentials>,
    api: ApiKind,
    front_back: FrontBackKind,
}

impl Selection {
    /// Start building a new `Selection`.
    pub fn builder() -> SelectionBuilder {
        SelectionBuilder::new()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }
    pub const fn database(&self) -> DatabaseKind {
        self.database
    }
    pub fn credentials(&self) -> Option<&DatabaseCredentials> {
        self.credentials.as_ref()
    }
    pub const fn api(&self) -> ApiKind {
        self.api
    }
    pub const fn front_back(&self) -> FrontBackKind {
        self.front_back
    }

    /// `true` when every tier is `none`.
    pub const fn is_empty_stack(&self) -> bool {
        self.database.is_none() && self.api.is_none() && self.front_back.is_none()
    }

    /// Re-check the invariants. Called by the builder.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_project_name(&self.project_name)?;

        match (self.database, &self.credentials) {
            (DatabaseKind::None, Some(_)) => Err(DomainError::UnexpectedCredentials),
            (DatabaseKind::Mysql | DatabaseKind::Postgresql, None) => {
                Err(DomainError::InvalidSelection(format!(
                    "database '{}' requires credentials",
                    self.database
                )))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (db: {}, api: {}, web: {})",
            self.project_name, self.database, self.api, self.front_back
        )
    }
}

fn validate_project_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::EmptyProjectName);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain whitespace".into(),
        });
    }
    if name.contains('/') || name.contains('\\') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name cannot contain path separators".into(),
        });
    }
    if name.starts_with('.') || name.starts_with('-') {
        return Err(DomainError::InvalidProjectName {
            name: name.into(),
            reason: "name must start with a letter or a digit".into(),
        });
    }
    Ok(())
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`Selection`].
///
/// Unset fields fall back to the wizard defaults. When a database is chosen
/// and no credentials were given, the placeholder credentials are used.
#[derive(Debug, Clone, Default)]
pub struct SelectionBuilder {
    project_name: Option<String>,
    database: Option<DatabaseKind>,
    credentials: Option<DatabaseCredentials>,
    api: Option<ApiKind>,
    front_back: Option<FrontBackKind>,
}

impl SelectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn database(mut self, database: DatabaseKind) -> Self {
        self.database = Some(database);
        self
    }

    pub fn credentials(mut self, credentials: DatabaseCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn api(mut self, api: ApiKind) -> Self {
        self.api = Some(api);
        self
    }

    pub fn front_back(mut self, front_back: FrontBackKind) -> Self {
        self.front_back = Some(front_back);
        self
    }

    /// Build and validate the selection.
    pub fn build(self) -> Result<Selection, DomainError> {
        let project_name = self
            .project_name
            .map(|n| n.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
        let database = self.database.unwrap_or_default();

        let credentials = match (database, self.credentials) {
            (DatabaseKind::None, Some(_)) => return Err(DomainError::UnexpectedCredentials),
            (DatabaseKind::None, None) => None,
            (_, Some(creds)) => Some(creds),
            (_, None) => Some(DatabaseCredentials::default()),
        };

        let selection = Selection {
            project_name,
            database,
            credentials,
            api: self.api.unwrap_or_default(),
            front_back: self.front_back.unwrap_or_default(),
        };

        selection.validate()?;
        Ok(selection)
    }
}
