//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "scaffold a stack" or "render its compose file".

pub mod compose_service;
pub mod scaffold_service;

pub use compose_service::ComposeService;
pub use scaffold_service::{ScaffoldOutcome, ScaffoldService};
