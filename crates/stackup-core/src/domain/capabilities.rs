//! Per-variant stack capabilities.
//!
//! Everything a tier choice implies lives here exactly once: which source
//! directory the generator produces, which package it runs, whether the
//! source is bind-mounted into the container, and which fixups follow the
//! generator. The planner and the composer only read these definitions.
//!
//! Lookups are exhaustive `match`es, never wildcard arms, so adding a variant
//! to an enum in `value_objects.rs` fails to compile until its definition is
//! written here.
//!
//! # Adding a New Framework
//!
//! 1. Add a variant to `ApiKind` or `FrontBackKind` in `value_objects.rs`
//! 2. Add its arm to [`api_def`] or [`web_def`]
//! 3. That's it: planner and composer derive everything from the definition

use crate::domain::value_objects::{ApiKind, DatabaseKind, FrontBackKind};

/// Host and container port of every `web` service.
pub const WEB_PORT: u16 = 8080;
/// Host and container port of every `api` service.
pub const API_PORT: u16 = 5000;

/// Container path the web source is mounted onto.
pub const WEB_MOUNT_POINT: &str = "/app/web";
/// Container path the api source is mounted onto.
pub const API_MOUNT_POINT: &str = "/app/api";

/// Directory holding the database Dockerfile and its data volume.
pub const DB_DIR: &str = "db";
/// Data directory inside [`DB_DIR`].
pub const DB_DATA_DIR: &str = "data";

/// Base image for generated Node web containers.
pub const NODE_IMAGE: &str = "node:14.16";

// ── Generators ───────────────────────────────────────────────────────────────

/// An external generator, as the `npx -y` argument string plus an optional
/// command that must succeed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorDef {
    pub package: &'static str,
    pub prerequisite: Option<&'static str>,
}

/// Fixups applied inside the source directory once the generator succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostGenerate {
    /// The generator output is used as-is.
    Nothing,
    /// Copy the generator's own `.env.example` to `.env`.
    CopyEnvExample,
    /// Strip `.git`, write a Node Dockerfile with `command` as `CMD`, write
    /// `.env.example` with the web port and copy it to `.env`.
    NodeWebApp { command: &'static [&'static str] },
}

// ── Database ─────────────────────────────────────────────────────────────────

/// Environment variable names the database image reads credentials from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialKeys {
    pub name: &'static str,
    pub user: &'static str,
    pub password: &'static str,
    pub root_password: &'static str,
}

/// What a database choice materializes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseDef {
    pub image: &'static str,
    pub port: u16,
    pub data_mount: &'static str,
    pub env: CredentialKeys,
}

pub const fn database_def(database: DatabaseKind) -> Option<DatabaseDef> {
    match database {
        DatabaseKind::None => None,
        DatabaseKind::Mysql => Some(DatabaseDef {
            image: "mysql:5.7",
            port: 3306,
            data_mount: "/var/lib/mysql",
            env: CredentialKeys {
                name: "MYSQL_DATABASE",
                user: "MYSQL_USER",
                password: "MYSQL_PASSWORD",
                root_password: "MYSQL_ROOT_PASSWORD",
            },
        }),
        DatabaseKind::Postgresql => Some(DatabaseDef {
            image: "postgres:9.6",
            port: 5432,
            data_mount: "/var/lib/postgresql/data",
            env: CredentialKeys {
                name: "POSTGRES_DB",
                user: "POSTGRES_USER",
                password: "POSTGRES_PASSWORD",
                root_password: "POSTGRES_ROOT_PASSWORD",
            },
        }),
    }
}

// ── API / Web ────────────────────────────────────────────────────────────────

/// What an api or web choice materializes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceTierDef {
    /// Directory the generator creates, relative to the project root.
    pub source_dir: &'static str,
    pub generator: GeneratorDef,
    /// Whether the source directory is bind-mounted into the container.
    pub mount_source: bool,
    pub post: PostGenerate,
}

pub const fn api_def(api: ApiKind) -> Option<SourceTierDef> {
    match api {
        ApiKind::None => None,
        ApiKind::Cocasus => Some(SourceTierDef {
            source_dir: "cocasus-api",
            generator: GeneratorDef {
                package: "cocasus init --type api --name cocasus-app --root ./cocasus-api --deps false",
                prerequisite: None,
            },
            mount_source: false,
            post: PostGenerate::CopyEnvExample,
        }),
        ApiKind::Express => Some(SourceTierDef {
            source_dir: "express-api",
            generator: GeneratorDef {
                package: "@rharkor/express-api-boilerplate --no-interaction",
                prerequisite: None,
            },
            mount_source: true,
            post: PostGenerate::Nothing,
        }),
        ApiKind::Flask => Some(SourceTierDef {
            source_dir: "flask-api",
            generator: GeneratorDef {
                package: "@rharkor/flask-api-boilerplate --no-interaction",
                prerequisite: None,
            },
            mount_source: true,
            post: PostGenerate::Nothing,
        }),
    }
}

pub const fn web_def(front_back: FrontBackKind) -> Option<SourceTierDef> {
    match front_back {
        FrontBackKind::None => None,
        FrontBackKind::Cocasus => Some(SourceTierDef {
            source_dir: "cocasus-app",
            generator: GeneratorDef {
                package: "cocasus init --type web --name cocasus-web --root ./cocasus-app --deps false",
                prerequisite: None,
            },
            mount_source: false,
            post: PostGenerate::CopyEnvExample,
        }),
        FrontBackKind::React => Some(SourceTierDef {
            source_dir: "my-react-app",
            generator: GeneratorDef {
                package: "create-react-app my-react-app",
                prerequisite: None,
            },
            mount_source: true,
            post: PostGenerate::NodeWebApp {
                command: &["npm", "start"],
            },
        }),
        FrontBackKind::Vue => Some(SourceTierDef {
            source_dir: "my-vue-app",
            generator: GeneratorDef {
                package: "vue create my-vue-app --default",
                prerequisite: Some("npm i -g @vue/cli"),
            },
            mount_source: true,
            post: PostGenerate::NodeWebApp {
                command: &["npm", "run", "serve"],
            },
        }),
        FrontBackKind::Flask => Some(SourceTierDef {
            source_dir: "flask-web",
            generator: GeneratorDef {
                package: "@rharkor/flask-web-boilerplate --no-interaction",
                prerequisite: None,
            },
            mount_source: true,
            post: PostGenerate::Nothing,
        }),
    }
}
