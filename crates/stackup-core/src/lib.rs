//! stackup core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the stackup
//! docker-compose scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stackup-cli (CLI)             │
//! │   (prompts, flags, spinner, banner)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldService, ComposeService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, GeneratorRunner, Serializer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stackup-adapters (Infrastructure)   │
//! │ (LocalFilesystem, ProcessGenerator, YAML)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Selection, ScaffoldPlanner, Composer)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackup_core::domain::{ApiKind, DatabaseKind, FrontBackKind, Selection, ServiceComposer};
//!
//! let selection = Selection::builder()
//!     .project_name("shop")
//!     .database(DatabaseKind::Postgresql)
//!     .api(ApiKind::Express)
//!     .front_back(FrontBackKind::React)
//!     .build()
//!     .unwrap();
//!
//! let document = ServiceComposer::compose(&selection);
//! assert_eq!(document.services.len(), 3);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComposeService, ScaffoldOutcome, ScaffoldService,
        ports::{CompositionSerializer, Filesystem, GeneratorRunner, ProgressReporter},
    };
    pub use crate::domain::{
        ApiKind, CompositionDocument, DatabaseCredentials, DatabaseKind, FrontBackKind,
        ScaffoldPlan, Selection, SelectionBuilder, Tier,
    };
    pub use crate::error::{StackupError, StackupResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
