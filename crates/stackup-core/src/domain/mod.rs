//! Core domain layer for stackup.
//!
//! Pure business logic: the selection model, the scaffold planner and the
//! service composer. All I/O (filesystem, generator processes, YAML) is
//! handled via ports defined in the application layer.
//!
//! - **No I/O**: planning and composition never touch the disk
//! - **Deterministic**: the same selection always yields the same plan and document
//! - **Closed dispatch**: per-framework facts live in [`capabilities`]

pub mod capabilities;
pub mod composer;
pub mod entities;
pub mod error;
pub mod planner;
pub mod value_objects;

mod validation;

pub use entities::{
    common::RelativePath,
    composition::{
        BACK_NETWORK, BuildContext, COMPOSE_FILE_NAME, COMPOSE_VERSION, CompositionDocument,
        Network, Service, Services,
    },
    scaffold_plan::{FileToWrite, GeneratorInvocation, PlannedStep, ScaffoldPlan, ScaffoldStep},
    selection::{DEFAULT_PROJECT_NAME, DatabaseCredentials, Selection, SelectionBuilder},
};

pub use composer::ServiceComposer;
pub use error::{DomainError, ErrorCategory};
pub use planner::ScaffoldPlanner;
pub use validation::DomainValidator;
pub use value_objects::{ApiKind, DatabaseKind, FrontBackKind, Tier};
