//! The composition document: what `docker-compose.yml` is rendered from.
//!
//! Field names and the serde attributes here ARE the output schema. Optional
//! keys (`volumes`, `environment`, `depends_on`) are `None` when absent so
//! that they are omitted rather than emitted empty.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::Tier;

/// Compose file format version written to every document.
pub const COMPOSE_VERSION: &str = "3.7";
/// The single network every service joins.
pub const BACK_NETWORK: &str = "back-network";
/// File name of the serialized document, at the project root.
pub const COMPOSE_FILE_NAME: &str = "docker-compose.yml";

/// Declarative description of every active tier and how they start together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositionDocument {
    pub version: String,
    pub services: Services,
    pub networks: BTreeMap<String, Network>,
}

impl CompositionDocument {
    /// An empty document with the shared bridge network.
    pub fn new() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(BACK_NETWORK.to_string(), Network::bridge());
        Self {
            version: COMPOSE_VERSION.to_string(),
            services: Services::default(),
            networks,
        }
    }

    pub fn service(&self, tier: Tier) -> Option<&Service> {
        self.services.get(tier)
    }
}

impl Default for CompositionDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Service map keyed by tier.
///
/// A struct rather than a map so the emitted order is always web, api, db.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Services {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<Service>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<Service>,
}

impl Services {
    pub fn get(&self, tier: Tier) -> Option<&Service> {
        match tier {
            Tier::Web => self.web.as_ref(),
            Tier::Api => self.api.as_ref(),
            Tier::Db => self.db.as_ref(),
        }
    }

    pub fn get_mut(&mut self, tier: Tier) -> Option<&mut Service> {
        match tier {
            Tier::Web => self.web.as_mut(),
            Tier::Api => self.api.as_mut(),
            Tier::Db => self.db.as_mut(),
        }
    }

    pub fn insert(&mut self, tier: Tier, service: Service) {
        let slot = match tier {
            Tier::Web => &mut self.web,
            Tier::Api => &mut self.api,
            Tier::Db => &mut self.db,
        };
        *slot = Some(service);
    }

    pub fn contains(&self, tier: Tier) -> bool {
        self.get(tier).is_some()
    }

    /// Active tiers with their services, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &Service)> {
        Tier::ALL
            .into_iter()
            .filter_map(move |tier| self.get(tier).map(|s| (tier, s)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One tier's service definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub build: BuildContext,
    pub image: String,
    pub container_name: String,
    pub ports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<BTreeMap<String, String>>,
    pub networks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<Tier>>,
}

impl Service {
    /// A service built from `context`, named `name`, publishing `port` on
    /// the same host port, on the back network.
    pub fn new(context: impl Into<String>, name: impl Into<String>, port: u16) -> Self {
        let name = name.into();
        Self {
            build: BuildContext::new(context),
            image: name.clone(),
            container_name: name,
            ports: vec![format!("{port}:{port}")],
            volumes: None,
            environment: None,
            networks: vec![BACK_NETWORK.to_string()],
            depends_on: None,
        }
    }

    pub fn with_volume(mut self, host: &str, container: &str) -> Self {
        self.volumes
            .get_or_insert_with(Vec::new)
            .push(format!("{host}:{container}"));
        self
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.environment
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn depends_on(&self) -> &[Tier] {
        self.depends_on.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildContext {
    pub context: String,
    pub dockerfile: String,
}

impl BuildContext {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            dockerfile: "Dockerfile".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Network {
    pub driver: String,
}

impl Network {
    pub fn bridge() -> Self {
        Self {
            driver: "bridge".to_string(),
        }
    }
}
