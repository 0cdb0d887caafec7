//! Generator adapter that spawns the package runner through the platform shell.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, instrument};

use stackup_core::{
    application::{ApplicationError, ports::GeneratorRunner},
    domain::GeneratorInvocation,
    error::StackupResult,
};

/// Package runner used when none is configured.
pub const DEFAULT_RUNNER: &str = "npx";

/// Lines of stderr kept in an error message.
const STDERR_TAIL: usize = 5;

#[derive(Debug, Error)]
enum ShellError {
    #[error("failed to start: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("{status}{tail}")]
    Exit { status: ExitStatus, tail: String },
}

/// Runs generators as child processes, blocking until they exit.
///
/// Output is captured, not streamed; the CLI shows a spinner meanwhile.
#[derive(Debug, Clone)]
pub struct ProcessGenerator {
    runner: String,
}

impl ProcessGenerator {
    pub fn new() -> Self {
        Self::with_runner(DEFAULT_RUNNER)
    }

    /// Use `runner` in place of `npx` (e.g. `pnpm dlx`).
    pub fn with_runner(runner: impl Into<String>) -> Self {
        Self {
            runner: runner.into(),
        }
    }

    /// The shell line that runs the generator itself.
    pub fn command_line(&self, invocation: &GeneratorInvocation) -> String {
        format!("{} -y {}", self.runner, invocation.package)
    }
}

impl Default for ProcessGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorRunner for ProcessGenerator {
    #[instrument(skip_all, fields(package = %invocation.package, cwd = %cwd.display()))]
    fn run(&self, invocation: &GeneratorInvocation, cwd: &Path) -> StackupResult<()> {
        if let Some(command) = &invocation.prerequisite {
            run_shell(command, cwd).map_err(|e| ApplicationError::PrerequisiteFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;
        }

        run_shell(&self.command_line(invocation), cwd).map_err(|e| {
            ApplicationError::GeneratorFailed {
                package: invocation.package.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(())
    }
}

fn shell(line: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", line]);
        cmd
    }
    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", line]);
        cmd
    }
}

fn run_shell(line: &str, cwd: &Path) -> Result<(), ShellError> {
    debug!(command = line, "Spawning");

    let output = shell(line)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let tail = lines[lines.len().saturating_sub(STDERR_TAIL)..].join("\n");

    Err(ShellError::Exit {
        status: output.status,
        tail: if tail.is_empty() {
            String::new()
        } else {
            format!(": {tail}")
        },
    })
}
