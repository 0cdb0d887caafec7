use crate::domain::{
    entities::{ScaffoldPlan, Selection},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_selection(selection: &Selection) -> Result<(), DomainError> {
        selection.validate()
    }

    pub fn validate_plan(plan: &ScaffoldPlan) -> Result<(), DomainError> {
        plan.validate()
    }
}
