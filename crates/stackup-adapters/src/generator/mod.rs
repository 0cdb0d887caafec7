//! Generator adapters.

mod process;
mod recording;

pub use process::{DEFAULT_RUNNER, ProcessGenerator};
pub use recording::RecordingGenerator;
