//! Service configuration
//!
//! Loaded from YAML. Holds the static setting definitions, localization texts,
//! cache sizing, and optional initial values.
//!
//! ```yaml
//! cache:
//!   capacity: 1000
//!   ttl_secs: 600
//! settings:
//!   - name: App.UI.Theme
//!     default_value: light
//!     providers: [U, G]
//!     display_key: DisplayName:App.UI.Theme
//! localization:
//!   DisplayName:App.UI.Theme: Theme
//! seed:
//!   - name: App.UI.Theme
//!     value: dark
//!     provider_name: G
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::prelude::*;
use crate::settings::SettingDefinition;

const DEFAULT_CACHE_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
	#[serde(default)]
	pub cache: CacheConfig,
	#[serde(default)]
	pub settings: Vec<SettingDefinitionConfig>,
	#[serde(default)]
	pub localization: HashMap<String, String>,
	#[serde(default)]
	pub seed: Vec<SeedValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
	#[serde(default = "default_cache_capacity")]
	pub capacity: usize,
	/// Entry lifetime. `None` keeps entries until evicted by capacity.
	#[serde(default)]
	pub ttl_secs: Option<u64>,
}

impl Default for CacheConfig {
	fn default() -> Self {
		Self { capacity: DEFAULT_CACHE_CAPACITY, ttl_secs: None }
	}
}

fn default_cache_capacity() -> usize {
	DEFAULT_CACHE_CAPACITY
}

fn default_true() -> bool {
	true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingDefinitionConfig {
	pub name: String,
	#[serde(default)]
	pub default_value: Option<String>,
	#[serde(default = "default_true")]
	pub visible: bool,
	#[serde(default)]
	pub providers: Vec<String>,
	#[serde(default)]
	pub display_key: Option<String>,
	#[serde(default)]
	pub description_key: Option<String>,
}

impl TryFrom<&SettingDefinitionConfig> for SettingDefinition {
	type Error = Error;

	fn try_from(cfg: &SettingDefinitionConfig) -> SmResult<Self> {
		let mut builder = SettingDefinition::builder(cfg.name.clone())
			.visible(cfg.visible)
			.providers(cfg.providers.iter().cloned());
		if let Some(default_value) = &cfg.default_value {
			builder = builder.default_value(default_value.clone());
		}
		if let Some(display_key) = &cfg.display_key {
			builder = builder.display_key(display_key.clone());
		}
		if let Some(description_key) = &cfg.description_key {
			builder = builder.description_key(description_key.clone());
		}
		builder.build()
	}
}

/// Initial value written through the update coordinator at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedValue {
	pub name: String,
	#[serde(default)]
	pub value: Option<String>,
	pub provider_name: String,
	#[serde(default)]
	pub provider_key: String,
}

impl ServiceConfig {
	pub fn from_yaml_str(yaml: &str) -> SmResult<Self> {
		Ok(serde_yaml::from_str(yaml)?)
	}

	pub fn load(path: impl AsRef<Path>) -> SmResult<Self> {
		let path = path.as_ref();
		let yaml = std::fs::read_to_string(path).map_err(|err| {
			Error::ConfigError(format!("cannot read {}: {}", path.display(), err))
		})?;
		info!("Loading service config from {}", path.display());
		Self::from_yaml_str(&yaml)
	}
}


// vim: ts=4
