//! Setting resolution
//!
//! Two filtering strategies are used:
//!
//! - **Provider scope** (`resolve_for_scope`): driven by the definitions. Every
//!   definition applicable to the provider is looked up, so unset settings are still
//!   reported with their defaults.
//! - **Global/tenant/user scope**: driven by the stored values. Only settings with an
//!   override on record are reported; definitions only filter visibility.
//!
//! Any error aborts the whole call; partial result lists are never returned.

use std::sync::Arc;

use setman_types::localizer::Localizer;
use setman_types::store_adapter::SettingStoreAdapter;
use setman_types::types::{SettingDto, SettingValue};

use crate::prelude::*;
use crate::settings::{FrozenSettingsRegistry, SettingDefinition};

pub struct SettingResolver {
	registry: Arc<FrozenSettingsRegistry>,
	store: Arc<dyn SettingStoreAdapter>,
	localizer: Arc<dyn Localizer>,
}

impl SettingResolver {
	pub fn new(
		registry: Arc<FrozenSettingsRegistry>,
		store: Arc<dyn SettingStoreAdapter>,
		localizer: Arc<dyn Localizer>,
	) -> Self {
		Self { registry, store, localizer }
	}

	/// All visible settings applicable to `provider_name`, with the value stored under
	/// `(provider_name, provider_key)` or `None`
	pub async fn resolve_for_scope(
		&self,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<Vec<SettingDto>> {
		let mut settings = Vec::new();

		for def in self.registry.list() {
			if !def.allows_provider(provider_name) || !def.is_visible_to_clients {
				continue;
			}

			let value = self.store.get_or_null(&def.name, provider_name, provider_key).await?;
			settings.push(self.assemble(def, value));
		}

		debug!(
			provider = %provider_name,
			key = %provider_key,
			count = settings.len(),
			"Resolved settings for scope"
		);
		Ok(settings)
	}

	/// Visible settings with a global override
	pub async fn resolve_global(&self) -> SmResult<Vec<SettingDto>> {
		let values = self.store.list_global().await?;
		self.assemble_values(values)
	}

	/// Visible settings with an override for the tenant. No tenant yields an empty list.
	pub async fn resolve_for_tenant(
		&self,
		tenant_id: Option<TenantId>,
	) -> SmResult<Vec<SettingDto>> {
		let Some(tenant_id) = tenant_id else {
			debug!("No tenant in context, skipping tenant settings");
			return Ok(Vec::new());
		};

		let values = self.store.list_for_tenant(tenant_id).await?;
		self.assemble_values(values)
	}

	/// Visible settings with an override for the user
	pub async fn resolve_for_user(&self, user_id: UserId) -> SmResult<Vec<SettingDto>> {
		let values = self.store.list_for_user(user_id).await?;
		self.assemble_values(values)
	}

	fn assemble_values(&self, values: Vec<SettingValue>) -> SmResult<Vec<SettingDto>> {
		let mut settings = Vec::with_capacity(values.len());

		for SettingValue { name, value } in values {
			let Some(def) = self.registry.find(&name) else {
				warn!(name = %name, "Store returned a value for an undefined setting");
				return Err(Error::InconsistentState(name));
			};

			if !def.is_visible_to_clients {
				continue;
			}
			settings.push(self.assemble(def, value));
		}

		Ok(settings)
	}

	fn assemble(&self, def: &SettingDefinition, value: Option<String>) -> SettingDto {
		SettingDto {
			name: def.name.clone(),
			value,
			default_value: def.default_value.clone(),
			display_name: self.localizer.localize(&def.display_key),
			description: def.description_key.as_deref().map(|key| self.localizer.localize(key)),
		}
	}
}

// vim: ts=4
