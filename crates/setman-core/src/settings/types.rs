//! Setting definitions and the definition registry
//!
//! Definitions are static metadata registered once during bootstrap. After the
//! registry is frozen it is shared read-only by every resolver and coordinator.

use std::collections::{BTreeSet, HashMap};

use crate::prelude::*;

/// Setting definition - metadata for one configurable option, independent of any stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingDefinition {
	/// Unique name (e.g., "App.UI.Theme")
	pub name: String,

	/// Value used when no scope has an override
	pub default_value: Option<String>,

	/// Hidden settings are never returned by resolution
	pub is_visible_to_clients: bool,

	/// Providers allowed to hold a value for this setting. Empty means all providers.
	pub providers: BTreeSet<String>,

	/// Localization key of the display name
	pub display_key: String,

	/// Localization key of the description
	pub description_key: Option<String>,
}

impl SettingDefinition {
	/// Create a builder for constructing a SettingDefinition
	pub fn builder(name: impl Into<String>) -> SettingDefinitionBuilder {
		SettingDefinitionBuilder::new(name)
	}

	/// Whether `provider_name` may read or override this setting
	pub fn allows_provider(&self, provider_name: &str) -> bool {
		self.providers.is_empty() || self.providers.contains(provider_name)
	}
}

/// Builder for SettingDefinition with fluent API
pub struct SettingDefinitionBuilder {
	name: String,
	default_value: Option<String>,
	is_visible_to_clients: bool,
	providers: BTreeSet<String>,
	display_key: Option<String>,
	description_key: Option<String>,
}

impl SettingDefinitionBuilder {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			default_value: None,
			is_visible_to_clients: true,
			providers: BTreeSet::new(),
			display_key: None,
			description_key: None,
		}
	}

	pub fn default_value(mut self, value: impl Into<String>) -> Self {
		self.default_value = Some(value.into());
		self
	}

	pub fn visible(mut self, visible: bool) -> Self {
		self.is_visible_to_clients = visible;
		self
	}

	/// Restrict the setting to the given provider (may be called repeatedly)
	pub fn provider(mut self, provider_name: impl Into<String>) -> Self {
		self.providers.insert(provider_name.into());
		self
	}

	pub fn providers<I, S>(mut self, providers: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.providers.extend(providers.into_iter().map(Into::into));
		self
	}

	/// Display name localization key (defaults to the setting name)
	pub fn display_key(mut self, key: impl Into<String>) -> Self {
		self.display_key = Some(key.into());
		self
	}

	pub fn description_key(mut self, key: impl Into<String>) -> Self {
		self.description_key = Some(key.into());
		self
	}

	/// Build the SettingDefinition
	pub fn build(self) -> SmResult<SettingDefinition> {
		if self.name.trim().is_empty() {
			return Err(Error::ConfigError("Setting name must not be empty".into()));
		}
		if self.providers.iter().any(|p| p.trim().is_empty()) {
			return Err(Error::ConfigError(format!(
				"Setting '{}' lists an empty provider name",
				self.name
			)));
		}

		let display_key = self.display_key.unwrap_or_else(|| self.name.clone());
		Ok(SettingDefinition {
			name: self.name,
			default_value: self.default_value,
			is_visible_to_clients: self.is_visible_to_clients,
			providers: self.providers,
			display_key,
			description_key: self.description_key,
		})
	}
}

/// Mutable registry used during bootstrap
#[derive(Debug, Default)]
pub struct SettingsRegistry {
	definitions: Vec<SettingDefinition>,
	index: HashMap<String, usize>,
}

impl SettingsRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a new setting definition
	pub fn register(&mut self, def: SettingDefinition) -> SmResult<()> {
		if self.index.contains_key(&def.name) {
			return Err(Error::ConfigError(format!("Setting '{}' is already registered", def.name)));
		}

		debug!("Registering setting: {}", def.name);
		self.index.insert(def.name.clone(), self.definitions.len());
		self.definitions.push(def);
		Ok(())
	}

	/// Freeze the registry (make it immutable)
	pub fn freeze(self) -> FrozenSettingsRegistry {
		info!("Freezing settings registry with {} definitions", self.definitions.len());
		FrozenSettingsRegistry { definitions: self.definitions, index: self.index }
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}

/// Immutable registry shared by the resolver and the update coordinator
///
/// Iteration follows registration order, so repeated listings are identical.
#[derive(Debug)]
pub struct FrozenSettingsRegistry {
	definitions: Vec<SettingDefinition>,
	index: HashMap<String, usize>,
}

impl FrozenSettingsRegistry {
	/// Get a setting definition by name
	pub fn get(&self, name: &str) -> SmResult<&SettingDefinition> {
		self.find(name).ok_or_else(|| Error::NotFound(name.to_string()))
	}

	pub fn find(&self, name: &str) -> Option<&SettingDefinition> {
		self.index.get(name).and_then(|&idx| self.definitions.get(idx))
	}

	/// List all registered settings
	pub fn list(&self) -> impl Iterator<Item = &SettingDefinition> {
		self.definitions.iter()
	}

	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}
}


// vim: ts=4
