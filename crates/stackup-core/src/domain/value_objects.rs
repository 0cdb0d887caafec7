//! Domain value objects: DatabaseKind, ApiKind, FrontBackKind, Tier.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! They hold NO generator or composition knowledge. Everything a variant
//! implies (source directory, generator package, ports) lives in
//! `capabilities.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm, the `FromStr` arm, and extend `ALL`
//! 3. Add the definition arm in `capabilities.rs` (the compiler will insist)

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DatabaseKind ─────────────────────────────────────────────────────────────

/// The database tier selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    None,
    #[default]
    Mysql,
    Postgresql,
}

impl DatabaseKind {
    pub const ALL: [Self; 3] = [Self::None, Self::Mysql, Self::Postgresql];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
        }
    }

    /// Human label used by prompts and listings.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mysql => "MySQL",
            Self::Postgresql => "PostgreSQL",
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "mysql" => Ok(Self::Mysql),
            "postgresql" | "postgres" | "pg" => Ok(Self::Postgresql),
            other => Err(DomainError::UnknownChoice {
                tier: "database",
                value: other.to_string(),
            }),
        }
    }
}

// ── ApiKind ──────────────────────────────────────────────────────────────────

/// The API tier selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKind {
    None,
    #[default]
    Cocasus,
    Express,
    Flask,
}

impl ApiKind {
    pub const ALL: [Self; 4] = [Self::None, Self::Cocasus, Self::Express, Self::Flask];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Cocasus => "cocasus",
            Self::Express => "express",
            Self::Flask => "flask",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Cocasus => "Cocasus",
            Self::Express => "Express",
            Self::Flask => "Flask",
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for ApiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "cocasus" => Ok(Self::Cocasus),
            "express" | "expressjs" => Ok(Self::Express),
            "flask" => Ok(Self::Flask),
            other => Err(DomainError::UnknownChoice {
                tier: "api",
                value: other.to_string(),
            }),
        }
    }
}

// ── FrontBackKind ────────────────────────────────────────────────────────────

/// The frontend/backend (web) tier selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrontBackKind {
    None,
    #[default]
    Cocasus,
    React,
    Vue,
    Flask,
}

impl FrontBackKind {
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Cocasus,
        Self::React,
        Self::Vue,
        Self::Flask,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Cocasus => "cocasus",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Flask => "flask",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Cocasus => "Cocasus",
            Self::React => "React",
            Self::Vue => "Vue",
            Self::Flask => "Flask",
        }
    }

    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for FrontBackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FrontBackKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "cocasus" => Ok(Self::Cocasus),
            "react" | "react-app" => Ok(Self::React),
            "vue" | "vuejs" => Ok(Self::Vue),
            "flask" => Ok(Self::Flask),
            other => Err(DomainError::UnknownChoice {
                tier: "front-back",
                value: other.to_string(),
            }),
        }
    }
}

// ── Tier ─────────────────────────────────────────────────────────────────────

/// One of the three independently-selectable service roles.
///
/// The declaration order is the order services appear in the composition
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Web,
    Api,
    Db,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Web, Self::Api, Self::Db];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
            Self::Db => "db",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
