//! Compose Service - composition without scaffolding.
//!
//! Backs `stackup compose`: derive the composition document for a selection
//! and render it, with no filesystem or generator side effects.

use tracing::{debug, instrument};

use crate::{
    application::ports::CompositionSerializer,
    domain::{CompositionDocument, DomainValidator as validator, Selection, ServiceComposer},
    error::StackupResult,
};

pub struct ComposeService {
    serializer: Box<dyn CompositionSerializer>,
}

impl ComposeService {
    pub fn new(serializer: Box<dyn CompositionSerializer>) -> Self {
        Self { serializer }
    }

    /// Build the composition document for a selection.
    pub fn compose(&self, selection: &Selection) -> StackupResult<CompositionDocument> {
        validator::validate_selection(selection)?;
        Ok(ServiceComposer::compose(selection))
    }

    /// Build and serialize the composition document.
    #[instrument(skip_all, fields(project = %selection.project_name()))]
    pub fn render(&self, selection: &Selection) -> StackupResult<String> {
        let document = self.compose(selection)?;
        debug!(services = document.services.len(), "Rendering composition");
        self.serializer.serialize(&document)
    }
}
