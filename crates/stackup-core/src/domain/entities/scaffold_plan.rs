use std::collections::HashSet;
use std::fmt;

use crate::domain::{entities::common::RelativePath, error::DomainError, value_objects::Tier};

/// Ordered scaffold steps ready for execution.
///
/// This is the output of the planner. It contains no business logic, only
/// data; the application layer executes it step by step through ports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub(crate) steps: Vec<PlannedStep>,
}

impl ScaffoldPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tier: Tier, step: ScaffoldStep) {
        self.steps.push(PlannedStep { tier, step });
    }

    pub fn with_step(mut self, tier: Tier, step: ScaffoldStep) -> Self {
        self.push(tier, step);
        self
    }

    /// Reject duplicate directory or file targets.
    ///
    /// Paths are relative by construction (`RelativePath`), so only
    /// duplicates need checking here.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut dirs = HashSet::new();
        let mut files = HashSet::new();

        for planned in &self.steps {
            let (seen, path) = match &planned.step {
                ScaffoldStep::CreateDir(path) => (&mut dirs, path),
                ScaffoldStep::WriteFile(file) => (&mut files, &file.path),
                ScaffoldStep::CopyFile { to, .. } => (&mut files, to),
                ScaffoldStep::RemoveDir(_) | ScaffoldStep::RunGenerator(_) => continue,
            };
            if !seen.insert(path.clone()) {
                return Err(DomainError::DuplicatePath {
                    path: path.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn steps(&self) -> impl Iterator<Item = &PlannedStep> {
        self.steps.iter()
    }

    pub fn for_tier(&self, tier: Tier) -> impl Iterator<Item = &ScaffoldStep> {
        self.steps
            .iter()
            .filter(move |p| p.tier == tier)
            .map(|p| &p.step)
    }

    pub fn generators(&self) -> impl Iterator<Item = &GeneratorInvocation> {
        self.steps.iter().filter_map(|p| match &p.step {
            ScaffoldStep::RunGenerator(inv) => Some(inv),
            _ => None,
        })
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.steps.iter().filter_map(|p| match &p.step {
            ScaffoldStep::WriteFile(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &RelativePath> {
        self.steps.iter().filter_map(|p| match &p.step {
            ScaffoldStep::CreateDir(d) => Some(d),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// A step tagged with the tier it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub tier: Tier,
    pub step: ScaffoldStep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldStep {
    /// Create a single directory; fails if it already exists.
    CreateDir(RelativePath),
    WriteFile(FileToWrite),
    /// Copy a file the generator (or an earlier step) produced.
    CopyFile {
        from: RelativePath,
        to: RelativePath,
    },
    /// Recursively remove a directory; a missing directory is not an error.
    RemoveDir(RelativePath),
    RunGenerator(GeneratorInvocation),
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir(p) => write!(f, "mkdir   {p}"),
            Self::WriteFile(file) => write!(f, "write   {}", file.path),
            Self::CopyFile { from, to } => write!(f, "copy    {from} -> {to}"),
            Self::RemoveDir(p) => write!(f, "remove  {p}"),
            Self::RunGenerator(inv) => write!(f, "run     {inv}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    pub path: RelativePath,
    pub content: String,
}

impl FileToWrite {
    pub fn new(path: impl Into<RelativePath>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// One opaque run of an external generator.
///
/// `package` is everything after `npx -y`. `prerequisite`, when present, is
/// a full shell command that must succeed before the generator starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratorInvocation {
    pub package: String,
    pub prerequisite: Option<String>,
    /// Directory the generator is expected to create.
    pub produces: RelativePath,
}

impl fmt::Display for GeneratorInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(pre) = &self.prerequisite {
            write!(f, "{pre} && ")?;
        }
        write!(f, "npx -y {}", self.package)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_file_targets_rejected() {
        let plan = ScaffoldPlan::new()
            .with_step(Tier::Db, ScaffoldStep::WriteFile(FileToWrite::new("db/Dockerfile", "a")))
            .with_step(Tier::Db, ScaffoldStep::WriteFile(FileToWrite::new("db/Dockerfile", "b")));
        assert!(matches!(
            plan.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn copy_target_counts_as_file() {
        let plan = ScaffoldPlan::new()
            .with_step(Tier::Web, ScaffoldStep::WriteFile(FileToWrite::new("app/.env", "x")))
            .with_step(
                Tier::Web,
                ScaffoldStep::CopyFile {
                    from: "app/.env.example".into(),
                    to: "app/.env".into(),
                },
            );
        assert!(plan.validate().is_err());
    }

    #[test]
    fn for_tier_filters_steps() {
        let plan = ScaffoldPlan::new()
            .with_step(Tier::Db, ScaffoldStep::CreateDir("db".into()))
            .with_step(Tier::Web, ScaffoldStep::RemoveDir("app/.git".into()));
        assert_eq!(plan.for_tier(Tier::Db).count(), 1);
        assert_eq!(plan.for_tier(Tier::Api).count(), 0);
        assert_eq!(plan.directories().count(), 1);
    }

    #[test]
    fn invocation_display_chains_prerequisite() {
        let inv = GeneratorInvocation {
            package: "vue create my-vue-app --default".into(),
            prerequisite: Some("npm i -g @vue/cli".into()),
            produces: "my-vue-app".into(),
        };
        assert_eq!(
            inv.to_string(),
            "npm i -g @vue/cli && npx -y vue create my-vue-app --default"
        );
    }
}
