pub mod common;
pub mod composition;
pub mod scaffold_plan;
pub mod selection;

pub use crate::domain::DomainError;
pub use composition::{CompositionDocument, Service, Services};
pub use scaffold_plan::{FileToWrite, GeneratorInvocation, PlannedStep, ScaffoldPlan, ScaffoldStep};
pub use selection::{DatabaseCredentials, Selection, SelectionBuilder};
