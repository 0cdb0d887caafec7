//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Plan the tiers for a selection
//! 2. Execute each step through the filesystem and generator ports
//! 3. Compose the services and write `docker-compose.yml` once
//!
//! Steps run strictly in plan order. The first failure aborts the run;
//! nothing already on disk is rolled back.

use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument};

use crate::{
    application::ports::{
        CompositionSerializer, Filesystem, GeneratorRunner, NoopProgress, ProgressReporter,
    },
    domain::{
        COMPOSE_FILE_NAME, CompositionDocument, DomainValidator as validator,
        GeneratorInvocation, PlannedStep, ScaffoldPlan, ScaffoldPlanner, ScaffoldStep, Selection,
        ServiceComposer,
    },
    error::StackupResult,
};

/// Everything a run produced, or would produce for a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub root: PathBuf,
    pub plan: ScaffoldPlan,
    pub document: CompositionDocument,
    pub compose_file: PathBuf,
    pub yaml: String,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    generator: Box<dyn GeneratorRunner>,
    serializer: Box<dyn CompositionSerializer>,
    progress: Box<dyn ProgressReporter>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// Progress is silent until [`with_progress`](Self::with_progress) is used.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        generator: Box<dyn GeneratorRunner>,
        serializer: Box<dyn CompositionSerializer>,
    ) -> Self {
        Self {
            filesystem,
            generator,
            serializer,
            progress: Box::new(NoopProgress),
        }
    }

    pub fn with_progress(mut self, progress: Box<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    /// Scaffold the selected stack under `root`.
    #[instrument(
        skip_all,
        fields(
            project = %selection.project_name(),
            root = %root.display()
        )
    )]
    pub fn scaffold(&self, selection: &Selection, root: &Path) -> StackupResult<ScaffoldOutcome> {
        info!(%selection, "Scaffolding stack");

        let plan = self.plan(selection)?;

        if !self.filesystem.exists(root) {
            self.filesystem.create_dir_all(root)?;
        }

        for planned in plan.steps() {
            self.execute(root, planned)?;
        }

        let document = ServiceComposer::compose(selection);
        let yaml = self.serializer.serialize(&document)?;
        let compose_file = root.join(COMPOSE_FILE_NAME);
        self.filesystem.write_file(&compose_file, &yaml)?;

        info!(
            steps = plan.len(),
            services = document.services.len(),
            "Scaffold completed successfully"
        );

        Ok(ScaffoldOutcome {
            root: root.to_path_buf(),
            plan,
            document,
            compose_file,
            yaml,
        })
    }

    /// Everything `scaffold` would do, without touching the filesystem or
    /// running any generator.
    #[instrument(skip_all, fields(project = %selection.project_name()))]
    pub fn preview(&self, selection: &Selection, root: &Path) -> StackupResult<ScaffoldOutcome> {
        let plan = self.plan(selection)?;
        let document = ServiceComposer::compose(selection);
        let yaml = self.serializer.serialize(&document)?;

        Ok(ScaffoldOutcome {
            root: root.to_path_buf(),
            plan,
            document,
            compose_file: root.join(COMPOSE_FILE_NAME),
            yaml,
        })
    }

    /// Whether `root` is missing or has no entries.
    pub fn is_dir_empty(&self, root: &Path) -> StackupResult<bool> {
        if !self.filesystem.exists(root) {
            return Ok(true);
        }
        Ok(self.filesystem.read_dir(root)?.is_empty())
    }

    /// Remove every entry under `root`.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn clear_directory(&self, root: &Path) -> StackupResult<()> {
        let entries = self.filesystem.read_dir(root)?;
        self.filesystem.clear_dir(root)?;
        info!(removed = entries.len(), "Cleared directory");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn plan(&self, selection: &Selection) -> StackupResult<ScaffoldPlan> {
        validator::validate_selection(selection)?;
        let plan = ScaffoldPlanner::plan(selection);
        validator::validate_plan(&plan)?;
        debug!(steps = plan.len(), "Plan ready");
        Ok(plan)
    }

    fn execute(&self, root: &Path, planned: &PlannedStep) -> StackupResult<()> {
        debug!(tier = %planned.tier, step = %planned.step, "Executing step");

        match &planned.step {
            ScaffoldStep::CreateDir(dir) => self.filesystem.create_dir(&dir.under(root)),
            ScaffoldStep::WriteFile(file) => self
                .filesystem
                .write_file(&file.path.under(root), &file.content),
            ScaffoldStep::CopyFile { from, to } => self
                .filesystem
                .copy_file(&from.under(root), &to.under(root)),
            ScaffoldStep::RemoveDir(dir) => {
                let path = dir.under(root);
                if self.filesystem.exists(&path) {
                    self.filesystem.remove_dir_all(&path)
                } else {
                    debug!(path = %path.display(), "Nothing to remove");
                    Ok(())
                }
            }
            ScaffoldStep::RunGenerator(invocation) => self.run_generator(invocation, root),
        }
    }

    fn run_generator(&self, invocation: &GeneratorInvocation, root: &Path) -> StackupResult<()> {
        let package = &invocation.package;
        self.progress.begin(&format!("Installing {package}"));

        match self.generator.run(invocation, root) {
            Ok(()) => {
                self.progress
                    .finish(&format!("Installation of {package} is done"));
                Ok(())
            }
            Err(e) => {
                self.progress
                    .abandon(&format!("Installation of {package} failed"));
                error!(package = %package, error = %e, "Generator failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::output::{MockCompositionSerializer, MockFilesystem, MockGeneratorRunner},
        },
        domain::{ApiKind, DatabaseKind, FrontBackKind},
        error::StackupError,
    };

    fn selection(db: DatabaseKind, api: ApiKind, fb: FrontBackKind) -> Selection {
        Selection::builder()
            .project_name("demo")
            .database(db)
            .api(api)
            .front_back(fb)
            .build()
            .unwrap()
    }

    fn yaml_serializer() -> MockCompositionSerializer {
        let mut serializer = MockCompositionSerializer::new();
        serializer
            .expect_serialize()
            .returning(|_| Ok("version: '3.7'\n".into()));
        serializer
    }

    fn service(
        fs: MockFilesystem,
        generator: MockGeneratorRunner,
        serializer: MockCompositionSerializer,
    ) -> ScaffoldService {
        ScaffoldService::new(Box::new(fs), Box::new(generator), Box::new(serializer))
    }

    #[derive(Default, Clone)]
    struct RecordingProgress(Arc<Mutex<Vec<String>>>);

    impl ProgressReporter for RecordingProgress {
        fn begin(&self, message: &str) {
            self.0.lock().unwrap().push(format!("begin: {message}"));
        }
        fn finish(&self, message: &str) {
            self.0.lock().unwrap().push(format!("finish: {message}"));
        }
        fn abandon(&self, message: &str) {
            self.0.lock().unwrap().push(format!("abandon: {message}"));
        }
    }

    #[test]
    fn empty_stack_writes_only_the_compose_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir().never();
        fs.expect_write_file()
            .times(1)
            .withf(|path, content| {
                path == Path::new("/work/docker-compose.yml") && content == "version: '3.7'\n"
            })
            .returning(|_, _| Ok(()));

        let mut generator = MockGeneratorRunner::new();
        generator.expect_run().never();

        let outcome = service(fs, generator, yaml_serializer())
            .scaffold(
                &selection(DatabaseKind::None, ApiKind::None, FrontBackKind::None),
                Path::new("/work"),
            )
            .unwrap();

        assert!(outcome.plan.is_empty());
        assert!(outcome.document.services.is_empty());
        assert_eq!(outcome.compose_file, PathBuf::from("/work/docker-compose.yml"));
    }

    #[test]
    fn database_steps_run_in_order_before_compose_file() {
        let mut seq = Sequence::new();
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir()
            .with(eq(Path::new("/work/db")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_create_dir()
            .with(eq(Path::new("/work/db/data")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/work/db/Dockerfile") && content == "FROM mysql:5.7\nEXPOSE 3306"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/work/docker-compose.yml"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let outcome = service(fs, MockGeneratorRunner::new(), yaml_serializer())
            .scaffold(
                &selection(DatabaseKind::Mysql, ApiKind::None, FrontBackKind::None),
                Path::new("/work"),
            )
            .unwrap();

        assert_eq!(outcome.document.services.len(), 1);
    }

    #[test]
    fn existing_db_dir_aborts_before_generators() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir().returning(|path| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "already exists".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let mut generator = MockGeneratorRunner::new();
        generator.expect_run().never();

        let mut serializer = MockCompositionSerializer::new();
        serializer.expect_serialize().never();

        let err = service(fs, generator, serializer)
            .scaffold(
                &selection(DatabaseKind::Mysql, ApiKind::Express, FrontBackKind::None),
                Path::new("/work"),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            StackupError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn failing_generator_aborts_and_skips_compose_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();
        fs.expect_remove_dir_all().never();
        fs.expect_copy_file().never();

        let mut generator = MockGeneratorRunner::new();
        generator.expect_run().times(1).returning(|inv, _| {
            Err(ApplicationError::GeneratorFailed {
                package: inv.package.clone(),
                reason: "exit status: 1".into(),
            }
            .into())
        });

        let mut serializer = MockCompositionSerializer::new();
        serializer.expect_serialize().never();

        let progress = RecordingProgress::default();
        let err = service(fs, generator, serializer)
            .with_progress(Box::new(progress.clone()))
            .scaffold(
                &selection(DatabaseKind::None, ApiKind::None, FrontBackKind::React),
                Path::new("/work"),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            StackupError::Application(ApplicationError::GeneratorFailed { .. })
        ));
        assert_eq!(
            *progress.0.lock().unwrap(),
            vec![
                "begin: Installing create-react-app my-react-app".to_string(),
                "abandon: Installation of create-react-app my-react-app failed".to_string(),
            ]
        );
    }

    #[test]
    fn second_generator_never_runs_after_first_fails() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_copy_file().never();
        fs.expect_write_file().never();

        let mut generator = MockGeneratorRunner::new();
        generator
            .expect_run()
            .times(1)
            .withf(|inv, _| inv.produces.to_string() == "cocasus-api")
            .returning(|inv, _| {
                Err(ApplicationError::GeneratorFailed {
                    package: inv.package.clone(),
                    reason: "not found".into(),
                }
                .into())
            });

        let result = service(fs, generator, MockCompositionSerializer::new()).scaffold(
            &selection(DatabaseKind::None, ApiKind::Cocasus, FrontBackKind::Cocasus),
            Path::new("/work"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_git_dir_is_skipped_and_node_files_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|path| path.ends_with(".git"))
            .returning(|_| false);
        fs.expect_exists().returning(|_| true);
        fs.expect_remove_dir_all().never();
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/work/my-vue-app/Dockerfile")
                    && content.ends_with("CMD [\"npm\", \"run\", \"serve\"]")
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/work/my-vue-app/.env.example") && content == "PORT=8080"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|path, _| path == Path::new("/work/docker-compose.yml"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_copy_file()
            .withf(|from, to| {
                from == Path::new("/work/my-vue-app/.env.example")
                    && to == Path::new("/work/my-vue-app/.env")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut generator = MockGeneratorRunner::new();
        generator
            .expect_run()
            .withf(|inv, cwd| {
                inv.prerequisite.as_deref() == Some("npm i -g @vue/cli") && cwd == Path::new("/work")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let progress = RecordingProgress::default();
        service(fs, generator, yaml_serializer())
            .with_progress(Box::new(progress.clone()))
            .scaffold(
                &selection(DatabaseKind::None, ApiKind::None, FrontBackKind::Vue),
                Path::new("/work"),
            )
            .unwrap();

        assert_eq!(
            progress.0.lock().unwrap().last().map(String::as_str),
            Some("finish: Installation of vue create my-vue-app --default is done")
        );
    }

    #[test]
    fn present_git_dir_is_removed() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_remove_dir_all()
            .with(eq(Path::new("/work/my-react-app/.git")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));
        fs.expect_copy_file().returning(|_, _| Ok(()));

        let mut generator = MockGeneratorRunner::new();
        generator.expect_run().returning(|_, _| Ok(()));

        service(fs, generator, yaml_serializer())
            .scaffold(
                &selection(DatabaseKind::None, ApiKind::None, FrontBackKind::React),
                Path::new("/work"),
            )
            .unwrap();
    }

    #[test]
    fn missing_root_is_created() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .with(eq(Path::new("/new/project")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        service(fs, MockGeneratorRunner::new(), yaml_serializer())
            .scaffold(
                &selection(DatabaseKind::None, ApiKind::None, FrontBackKind::None),
                Path::new("/new/project"),
            )
            .unwrap();
    }

    #[test]
    fn preview_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir().never();
        fs.expect_write_file().never();

        let mut generator = MockGeneratorRunner::new();
        generator.expect_run().never();

        let outcome = service(fs, generator, yaml_serializer())
            .preview(
                &selection(DatabaseKind::Postgresql, ApiKind::Flask, FrontBackKind::React),
                Path::new("/work"),
            )
            .unwrap();

        assert_eq!(outcome.plan.generators().count(), 2);
        assert_eq!(outcome.document.services.len(), 3);
        assert_eq!(outcome.yaml, "version: '3.7'\n");
    }

    #[test]
    fn empty_directory_checks() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("/missing")))
            .returning(|_| false);
        fs.expect_exists().returning(|_| true);
        fs.expect_read_dir()
            .with(eq(Path::new("/busy")))
            .returning(|_| Ok(vec!["README.md".into()]));
        fs.expect_read_dir().returning(|_| Ok(vec![]));

        let svc = service(fs, MockGeneratorRunner::new(), MockCompositionSerializer::new());
        assert!(svc.is_dir_empty(Path::new("/missing")).unwrap());
        assert!(svc.is_dir_empty(Path::new("/empty")).unwrap());
        assert!(!svc.is_dir_empty(Path::new("/busy")).unwrap());
    }

    #[test]
    fn clear_directory_delegates_to_port() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir()
            .returning(|_| Ok(vec!["a".into(), "b".into()]));
        fs.expect_clear_dir()
            .with(eq(Path::new("/busy")))
            .times(1)
            .returning(|_| Ok(()));

        service(fs, MockGeneratorRunner::new(), MockCompositionSerializer::new())
            .clear_directory(Path::new("/busy"))
            .unwrap();
    }
}
