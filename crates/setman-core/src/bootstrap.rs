//! Startup wiring: registry construction, service assembly, and seeding

use std::sync::Arc;

use setman_types::cache_adapter::SettingCacheAdapter;
use setman_types::localizer::{KeyLocalizer, Localizer, MapLocalizer};
use setman_types::store_adapter::SettingStoreAdapter;
use setman_types::types::UpdateSettingItem;

use crate::app_service::SettingAppService;
use crate::config::{SeedValue, ServiceConfig};
use crate::prelude::*;
use crate::settings::{FrozenSettingsRegistry, SettingDefinition, SettingsRegistry};
use crate::update::SettingUpdateCoordinator;

/// Register all definitions listed in the config
pub fn register_from_config(
	config: &ServiceConfig,
	registry: &mut SettingsRegistry,
) -> SmResult<()> {
	for cfg in &config.settings {
		registry.register(SettingDefinition::try_from(cfg)?)?;
	}
	Ok(())
}

pub fn build_registry(config: &ServiceConfig) -> SmResult<Arc<FrozenSettingsRegistry>> {
	let mut registry = SettingsRegistry::new();
	register_from_config(config, &mut registry)?;
	Ok(Arc::new(registry.freeze()))
}

/// Localizer for the config's `localization` table. Without one, display and
/// description keys are shown as they are.
pub fn build_localizer(config: &ServiceConfig) -> Arc<dyn Localizer> {
	if config.localization.is_empty() {
		Arc::new(KeyLocalizer)
	} else {
		Arc::new(MapLocalizer::new(config.localization.clone()))
	}
}

/// Build the application service from config
pub fn build_service(
	config: &ServiceConfig,
	store: Arc<dyn SettingStoreAdapter>,
	cache: Arc<dyn SettingCacheAdapter>,
) -> SmResult<SettingAppService> {
	let registry = build_registry(config)?;
	Ok(SettingAppService::new(registry, store, cache, build_localizer(config)))
}

/// Write seed values through the coordinator so the cache stays coherent.
/// Fails on the first value that is not fully applied.
pub async fn apply_seed(
	coordinator: &SettingUpdateCoordinator,
	seed: &[SeedValue],
) -> SmResult<()> {
	for value in seed {
		let item = UpdateSettingItem::new(value.name.clone(), value.value.clone());
		coordinator
			.update(&value.provider_name, &value.provider_key, std::slice::from_ref(&item))
			.await
			.into_result()?;
	}
	if !seed.is_empty() {
		info!("Applied {} seed values", seed.len());
	}
	Ok(())
}

// vim: ts=4
