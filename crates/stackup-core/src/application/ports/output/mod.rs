//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stackup-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{CompositionDocument, GeneratorInvocation};
use crate::error::StackupResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackup_adapters::filesystem::LocalFilesystem` (production)
/// - `stackup_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create exactly one directory. Fails if it already exists.
    fn create_dir(&self, path: &Path) -> StackupResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StackupResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> StackupResult<()>;

    /// Copy a file. Fails if `from` does not exist.
    fn copy_file(&self, from: &Path, to: &Path) -> StackupResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> StackupResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the direct entries of a directory, sorted.
    fn read_dir(&self, path: &Path) -> StackupResult<Vec<String>>;

    /// Remove every entry of a directory, keeping the directory itself.
    fn clear_dir(&self, path: &Path) -> StackupResult<()>;
}

/// Port for running an external project generator.
///
/// Implemented by:
/// - `stackup_adapters::generator::ProcessGenerator` (spawns `npx`)
/// - `stackup_adapters::generator::RecordingGenerator` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait GeneratorRunner: Send + Sync {
    /// Run the prerequisite (if any), then the generator, in `cwd`.
    ///
    /// Blocks until the generator exits.
    fn run(&self, invocation: &GeneratorInvocation, cwd: &Path) -> StackupResult<()>;
}

/// Port for rendering the composition document to text.
#[cfg_attr(test, mockall::automock)]
pub trait CompositionSerializer: Send + Sync {
    fn serialize(&self, document: &CompositionDocument) -> StackupResult<String>;
}

/// Port for user feedback while a long-running step is outstanding.
pub trait ProgressReporter: Send + Sync {
    fn begin(&self, message: &str);
    fn finish(&self, message: &str);
    fn abandon(&self, message: &str);
}

/// Reporter that shows nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn begin(&self, _message: &str) {}
    fn finish(&self, _message: &str) {}
    fn abandon(&self, _message: &str) {}
}
