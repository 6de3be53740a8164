//! Setting application service
//!
//! The surface a transport layer (HTTP, RPC, ...) calls into. Each operation checks
//! the caller's permissions, then delegates to the resolver or the update coordinator.

use std::sync::Arc;

use setman_types::cache_adapter::SettingCacheAdapter;
use setman_types::localizer::Localizer;
use setman_types::store_adapter::SettingStoreAdapter;
use setman_types::types::{SettingDto, UpdateSettingItem};

use crate::access::{RequestCtx, SettingPermission};
use crate::cached_store::CachedSettingStore;
use crate::prelude::*;
use crate::resolver::SettingResolver;
use crate::settings::FrozenSettingsRegistry;
use crate::update::{SettingUpdateCoordinator, UpdateReport};

pub struct SettingAppService {
	registry: Arc<FrozenSettingsRegistry>,
	resolver: SettingResolver,
	coordinator: SettingUpdateCoordinator,
}

impl SettingAppService {
	/// Wire the service. Single-value reads go through the cache; updates write the
	/// store and then the cache.
	pub fn new(
		registry: Arc<FrozenSettingsRegistry>,
		store: Arc<dyn SettingStoreAdapter>,
		cache: Arc<dyn SettingCacheAdapter>,
		localizer: Arc<dyn Localizer>,
	) -> Self {
		let cached: Arc<dyn SettingStoreAdapter> =
			Arc::new(CachedSettingStore::new(store.clone(), cache.clone()));
		Self {
			resolver: SettingResolver::new(registry.clone(), cached, localizer),
			coordinator: SettingUpdateCoordinator::new(registry.clone(), store, cache),
			registry,
		}
	}

	pub fn registry(&self) -> &Arc<FrozenSettingsRegistry> {
		&self.registry
	}

	/// Unchecked access for bootstrap code (seeding) running outside any request
	pub fn coordinator(&self) -> &SettingUpdateCoordinator {
		&self.coordinator
	}

	/// GET settings of a provider scope
	pub async fn get(
		&self,
		ctx: &RequestCtx,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<Vec<SettingDto>> {
		ctx.require(SettingPermission::Default)?;
		self.resolver.resolve_for_scope(provider_name, provider_key).await
	}

	/// Update settings of a provider scope
	pub async fn update(
		&self,
		ctx: &RequestCtx,
		provider_name: &str,
		provider_key: &str,
		items: &[UpdateSettingItem],
	) -> SmResult<UpdateReport> {
		ctx.require(SettingPermission::Manager)?;
		Ok(self.coordinator.update(provider_name, provider_key, items).await)
	}

	/// Global settings. Available without any permission.
	pub async fn get_all_global(&self) -> SmResult<Vec<SettingDto>> {
		self.resolver.resolve_global().await
	}

	pub async fn get_all_for_tenant(&self, ctx: &RequestCtx) -> SmResult<Vec<SettingDto>> {
		ctx.require(SettingPermission::Default)?;
		self.resolver.resolve_for_tenant(ctx.tenant_id).await
	}

	pub async fn get_all_for_user(
		&self,
		ctx: &RequestCtx,
		user_id: UserId,
	) -> SmResult<Vec<SettingDto>> {
		ctx.require(SettingPermission::Default)?;
		self.resolver.resolve_for_user(user_id).await
	}

	pub async fn get_all_for_current_user(&self, ctx: &RequestCtx) -> SmResult<Vec<SettingDto>> {
		ctx.require(SettingPermission::Default)?;
		let user_id = ctx.user_id.ok_or(Error::Unauthorized)?;
		self.resolver.resolve_for_user(user_id).await
	}
}

// vim: ts=4
