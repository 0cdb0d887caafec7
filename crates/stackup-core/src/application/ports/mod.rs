//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `stackup-adapters` (and the CLI, for progress) implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `GeneratorRunner`: Running external project generators
//!   - `CompositionSerializer`: Rendering the composition document
//!   - `ProgressReporter`: Feedback while a generator runs

pub mod output;

pub use output::{
    CompositionSerializer, Filesystem, GeneratorRunner, NoopProgress, ProgressReporter,
};
