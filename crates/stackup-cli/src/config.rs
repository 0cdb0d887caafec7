//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STACKUP_<SECTION>__<KEY>`,
//!    e.g. `STACKUP_DEFAULTS__DATABASE=postgresql`
//! 3. Config file: `--config FILE`, otherwise `.stackup.toml` in the
//!    current directory layered over the platform config file
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stackup_adapters::DEFAULT_RUNNER;
use stackup_core::domain::{DEFAULT_PROJECT_NAME, DatabaseCredentials};

/// File name of the per-directory configuration.
pub const LOCAL_CONFIG_FILE: &str = ".stackup.toml";

const ENV_PREFIX: &str = "STACKUP";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a question is skipped.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// External generator settings.
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub project_name: String,
    pub database: String,
    pub api: String,
    pub front_back: String,
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_root_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Command that executes a generator package, e.g. `npx` or `pnpm dlx`.
    pub runner: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.into(),
            database: "mysql".into(),
            api: "cocasus".into(),
            front_back: "cocasus".into(),
            db_name: DatabaseCredentials::DEFAULT_NAME.into(),
            db_user: DatabaseCredentials::DEFAULT_USER.into(),
            db_password: DatabaseCredentials::DEFAULT_PASSWORD.into(),
            db_root_password: DatabaseCredentials::DEFAULT_ROOT_PASSWORD.into(),
        }
    }
}

impl Defaults {
    /// The configured credential placeholders.
    pub fn credentials(&self) -> DatabaseCredentials {
        DatabaseCredentials::new(
            &self.db_name,
            &self.db_user,
            &self.db_password,
            &self.db_root_password,
        )
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runner: DEFAULT_RUNNER.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file(s), then environment.
    ///
    /// An explicit `config_file` must exist; the default locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;
        let mut builder = Config::builder().add_source(defaults);

        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "Using configuration file");
                builder = builder.add_source(File::from(path.as_path()).required(true));
            }
            None => {
                for path in Self::search_paths() {
                    builder = builder.add_source(File::from(path.as_path()).required(false));
                }
            }
        }

        let merged = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        merged
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.stackup.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "stackup", "stackup")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Files consulted when `--config` is not given, lowest priority first.
    fn search_paths() -> Vec<PathBuf> {
        let global = Self::config_path();
        let local = Path::new(LOCAL_CONFIG_FILE).to_path_buf();
        if global == local {
            vec![local]
        } else {
            vec![global, local]
        }
    }

    /// Render as TOML, as written by `stackup init`.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }
}
