//! `stackup compose`: print the composition document for a selection.
//!
//! Never prompts and never touches the filesystem: unanswered choices come
//! from the configured defaults.

use tracing::instrument;

use stackup_adapters::YamlSerializer;
use stackup_core::application::ComposeService;

use crate::{
    cli::{ComposeArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt::AcceptDefaults,
    wizard,
};

#[instrument(skip_all)]
pub fn execute(args: ComposeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let selection = wizard::resolve_selection(&args.selection, &config.defaults, &AcceptDefaults)?;
    let service = ComposeService::new(Box::new(YamlSerializer::new()));

    let rendered = match output.format() {
        OutputFormat::Json => {
            let document = service.compose(&selection)?;
            serde_json::to_string_pretty(&document).map_err(|e| CliError::IoError {
                message: "Cannot render the composition as JSON".into(),
                source: e.into(),
            })?
        }
        _ => service.render(&selection)?,
    };

    output.data(&rendered)?;
    Ok(())
}
