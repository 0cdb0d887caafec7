//! Infrastructure adapters for stackup.
//!
//! This crate implements the ports defined in `stackup-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod generator;
pub mod serializer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use generator::{DEFAULT_RUNNER, ProcessGenerator, RecordingGenerator};
pub use serializer::YamlSerializer;
