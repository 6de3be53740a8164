//! Cache-first reads in front of a setting store
//!
//! `CachedSettingStore` wraps any `SettingStoreAdapter`. Single-value reads consult
//! the setting cache first and fall back to the inner store on a miss. Reads never
//! write the cache: an entry only ever comes from a write that the store already
//! accepted (the update coordinator, or `set` on this decorator). A value read from
//! the store can therefore never land in the cache after a newer write finished.
//! Batch listings go straight to the inner store.

use async_trait::async_trait;
use std::sync::Arc;

use setman_types::cache_adapter::SettingCacheAdapter;
use setman_types::store_adapter::SettingStoreAdapter;
use setman_types::types::{SettingCacheItem, SettingValue};

use crate::cache_key;
use crate::prelude::*;

#[derive(Debug)]
pub struct CachedSettingStore {
	inner: Arc<dyn SettingStoreAdapter>,
	cache: Arc<dyn SettingCacheAdapter>,
}

impl CachedSettingStore {
	pub fn new(inner: Arc<dyn SettingStoreAdapter>, cache: Arc<dyn SettingCacheAdapter>) -> Self {
		Self { inner, cache }
	}
}

#[async_trait]
impl SettingStoreAdapter for CachedSettingStore {
	async fn get_or_null(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<Option<String>> {
		let key = cache_key::encode(name, provider_name, provider_key);

		match self.cache.get(&key).await {
			Ok(Some(item)) => {
				debug!(key = %key, "Setting cache hit");
				return Ok(item.value);
			}
			Ok(None) => debug!(key = %key, "Setting cache miss"),
			Err(err) => warn!(key = %key, error = %err, "Setting cache read failed, using store"),
		}

		self.inner.get_or_null(name, provider_name, provider_key).await
	}

	async fn list_global(&self) -> SmResult<Vec<SettingValue>> {
		self.inner.list_global().await
	}

	async fn list_for_tenant(&self, tenant_id: TenantId) -> SmResult<Vec<SettingValue>> {
		self.inner.list_for_tenant(tenant_id).await
	}

	async fn list_for_user(&self, user_id: UserId) -> SmResult<Vec<SettingValue>> {
		self.inner.list_for_user(user_id).await
	}

	/// Store write followed by a cache overwrite. The cache is not touched when the
	/// store rejects the write.
	async fn set(
		&self,
		name: &str,
		value: Option<&str>,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<()> {
		self.inner.set(name, value, provider_name, provider_key).await?;

		let key = cache_key::encode(name, provider_name, provider_key);
		self.cache.set(&key, SettingCacheItem::new(value.map(str::to_string))).await
	}
}

// vim: ts=4
