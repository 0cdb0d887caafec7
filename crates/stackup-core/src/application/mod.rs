//! Application layer for stackup.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ComposeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ComposeService, ScaffoldOutcome, ScaffoldService};

pub use ports::{
    CompositionSerializer, Filesystem, GeneratorRunner, NoopProgress, ProgressReporter,
};

pub use error::ApplicationError;
