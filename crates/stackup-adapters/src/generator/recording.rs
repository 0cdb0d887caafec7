//! Generator adapter for tests: records invocations instead of spawning.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use stackup_core::{
    application::{ApplicationError, ports::GeneratorRunner},
    domain::GeneratorInvocation,
    error::StackupResult,
};

use crate::filesystem::MemoryFilesystem;

/// Records every invocation and, when given a [`MemoryFilesystem`], fakes
/// the generator's output inside it.
///
/// The fake output is a project directory holding `package.json`,
/// `.env.example` and a `.git` directory, which is enough for every
/// post-generate step to find what it expects.
#[derive(Debug, Clone, Default)]
pub struct RecordingGenerator {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    calls: Vec<GeneratorInvocation>,
    output: Option<MemoryFilesystem>,
    fail_on: Option<String>,
}

impl RecordingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed generator output into `fs` on every successful run.
    pub fn seeding(fs: MemoryFilesystem) -> Self {
        let generator = Self::new();
        if let Ok(mut inner) = generator.inner.lock() {
            inner.output = Some(fs);
        }
        generator
    }

    /// Fail any invocation whose package contains `needle`.
    pub fn fail_on(self, needle: impl Into<String>) -> Self {
        if let Ok(mut inner) = self.inner.lock() {
            inner.fail_on = Some(needle.into());
        }
        self
    }

    /// Invocations seen so far, failed ones included.
    pub fn calls(&self) -> Vec<GeneratorInvocation> {
        self.inner
            .lock()
            .map(|inner| inner.calls.clone())
            .unwrap_or_default()
    }
}

impl GeneratorRunner for RecordingGenerator {
    fn run(&self, invocation: &GeneratorInvocation, cwd: &Path) -> StackupResult<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.calls.push(invocation.clone());

        if let Some(needle) = &inner.fail_on {
            if invocation.package.contains(needle.as_str()) {
                return Err(ApplicationError::GeneratorFailed {
                    package: invocation.package.clone(),
                    reason: "configured to fail".into(),
                }
                .into());
            }
        }

        if let Some(fs) = &inner.output {
            let project = invocation.produces.under(cwd);
            fs.seed_file(&project.join("package.json"), "{}")?;
            fs.seed_file(&project.join(".env.example"), "PORT=3000")?;
            fs.seed_file(&project.join(".git").join("HEAD"), "ref: refs/heads/main")?;
        }

        Ok(())
    }
}
