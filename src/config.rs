use crate::error::ConfigError;
use crate::options::{CorsDefaults, ResourceOptions};
use crate::router::CorsRouter;
use serde::Deserialize;

/// One `resources` entry of a [`RouterConfig`] document.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceEntry {
    pub path: String,
    #[serde(default)]
    pub options: ResourceOptions,
}

/// Declarative router configuration:
///
/// ```json
/// {
///   "defaults": { "max_age": 600 },
///   "resources": [
///     { "path": "/public/*", "options": { "origins": "*" } },
///     { "path": "/*", "options": { "origins": ["https://app.example.com"] } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    #[serde(default)]
    pub defaults: CorsDefaults,
    #[serde(default)]
    pub resources: Vec<ResourceEntry>,
}

impl RouterConfig {
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Registers every resource in document order.
    pub fn build(self) -> Result<CorsRouter, ConfigError> {
        let mut router = CorsRouter::with_defaults(self.defaults);
        for entry in self.resources {
            router.register(&entry.path, entry.options)?;
        }
        Ok(router)
    }
}

impl CorsRouter {
    /// Parses and builds a router from a JSON [`RouterConfig`] document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        RouterConfig::from_json_str(source)?.build()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
