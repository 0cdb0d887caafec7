//! Implementation of the `stackup new` command.
//!
//! Responsibility: gather the selection, wire the adapters into the core
//! scaffold service, handle the clear-folder question, and display results.
//! No business logic lives here.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::{debug, info, instrument};

use stackup_adapters::{LocalFilesystem, ProcessGenerator, YamlSerializer};
use stackup_core::{
    application::{ProgressReporter, ScaffoldOutcome, ScaffoldService},
    domain::Selection,
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    progress::SpinnerReporter,
    prompt::{self, Prompter},
    wizard::{self, CLEAR_QUESTION},
};

/// Execute the `stackup new` command.
///
/// Dispatch sequence:
/// 1. Resolve the selection (flags, then prompts or config defaults)
/// 2. Resolve the target directory
/// 3. `--dry-run`: print the plan and the compose file, then stop
/// 4. Offer to clear a non-empty directory
/// 5. Execute the plan via `ScaffoldService`
/// 6. Print the banner
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let prompter = prompt::prompter(args.yes);

    // 1. Selection
    let selection = wizard::resolve_selection(&args.selection, &config.defaults, prompter.as_ref())?;

    // 2. Target directory
    let root = resolve_root(args.dir.as_deref())?;
    debug!(root = %root.display(), "Target directory resolved");

    let service = build_service(&config, spinner(&output));

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        let outcome = service.preview(&selection, &root)?;
        if !service.is_dir_empty(&root)? {
            output.warning(&format!("{} is not empty", root.display()))?;
        }
        return show_preview(&outcome, &selection, &output);
    }

    // 4. Clear-folder question
    if !service.is_dir_empty(&root)? && should_clear(&args, prompter.as_ref())? {
        service.clear_directory(&root)?;
        info!(root = %root.display(), "Cleared target directory");
    }

    // 5. Scaffold
    let as_json = output.format() == OutputFormat::Json;
    if !as_json {
        output.header(&format!(
            "Scaffolding '{}' in {}",
            selection.project_name(),
            root.display()
        ))?;
    }
    info!(%selection, root = %root.display(), "Scaffold started");

    let outcome = service.scaffold(&selection, &root)?;

    info!(project = %selection.project_name(), "Scaffold completed");

    // 6. Results
    if as_json {
        output.data(&summary(&outcome, &selection, false).to_string())?;
        return Ok(());
    }

    output.success(&format!("Wrote {}", outcome.compose_file.display()))?;
    output.banner()?;

    Ok(())
}

/// `--clear` always clears, `--yes` alone never does, otherwise ask.
fn should_clear(args: &NewArgs, prompter: &dyn Prompter) -> CliResult<bool> {
    if args.clear {
        return Ok(true);
    }
    if args.yes {
        return Ok(false);
    }
    prompter.confirm(CLEAR_QUESTION, false)
}

fn build_service(config: &AppConfig, progress: Box<dyn ProgressReporter>) -> ScaffoldService {
    ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessGenerator::with_runner(config.generator.runner.clone())),
        Box::new(YamlSerializer::new()),
    )
    .with_progress(progress)
}

fn spinner(output: &OutputManager) -> Box<dyn ProgressReporter> {
    if output.is_quiet() || output.format() == OutputFormat::Json {
        Box::new(SpinnerReporter::hidden())
    } else {
        Box::new(SpinnerReporter::new())
    }
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// Absolute scaffold root: `--dir` if given (relative to the current
/// directory), otherwise the current directory itself.
pub fn resolve_root(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) if dir.is_absolute() => Ok(dir.to_path_buf()),
        Some(dir) => Ok(current_dir()?.join(dir)),
        None => current_dir(),
    }
}

fn current_dir() -> CliResult<PathBuf> {
    std::env::current_dir().with_cli_context(|| "Cannot determine the current directory")
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn show_preview(
    outcome: &ScaffoldOutcome,
    selection: &Selection,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.data(&summary(outcome, selection, true).to_string())?;
        return Ok(());
    }

    output.info(&format!(
        "Dry run: nothing will be written to {}",
        outcome.root.display()
    ))?;
    output.print(&format!("  {selection}"))?;
    output.print("")?;

    if outcome.plan.is_empty() {
        output.print("  (no files or generators for this selection)")?;
    }
    for planned in outcome.plan.steps() {
        output.print(&format!("  [{:<3}] {}", planned.tier.as_str(), planned.step))?;
    }

    output.print("")?;
    output.header(&format!("{}:", outcome.compose_file.display()))?;
    output.data(&outcome.yaml)?;
    Ok(())
}

/// Machine-readable description of a run.
fn summary(outcome: &ScaffoldOutcome, selection: &Selection, dry_run: bool) -> serde_json::Value {
    let steps: Vec<_> = outcome
        .plan
        .steps()
        .map(|planned| json!({ "tier": planned.tier.as_str(), "step": planned.step.to_string() }))
        .collect();
    let services: Vec<_> = outcome
        .document
        .services
        .iter()
        .map(|(tier, _)| tier.as_str())
        .collect();

    json!({
        "project": selection.project_name(),
        "database": selection.database().as_str(),
        "api": selection.api().as_str(),
        "front_back": selection.front_back().as_str(),
        "root": outcome.root.display().to_string(),
        "compose_file": outcome.compose_file.display().to_string(),
        "dry_run": dry_run,
        "services": services,
        "steps": steps,
        "compose": outcome.yaml,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
