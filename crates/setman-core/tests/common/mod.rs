//! Shared fixtures for setman-core integration tests
//!
//! Each test builds its own registry, store, and cache so tests never share state.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Notify;

use setman_cache_adapter_lru::LruSettingCache;
use setman_core::settings::{FrozenSettingsRegistry, SettingDefinition, SettingsRegistry};
use setman_store_adapter_memory::MemorySettingStore;
use setman_types::cache_adapter::SettingCacheAdapter;
use setman_types::error::{Error, SmResult};
use setman_types::store_adapter::SettingStoreAdapter;
use setman_types::types::{SettingCacheItem, SettingValue, TenantId, UserId};

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

pub fn registry(defs: Vec<SettingDefinition>) -> Arc<FrozenSettingsRegistry> {
	let mut registry = SettingsRegistry::new();
	for def in defs {
		registry.register(def).unwrap();
	}
	Arc::new(registry.freeze())
}

/// `A` visible for all providers, `B` hidden, `C` restricted to users
pub fn sample_registry() -> Arc<FrozenSettingsRegistry> {
	registry(vec![
		SettingDefinition::builder("A")
			.default_value("x")
			.display_key("DisplayName:A")
			.description_key("Description:A")
			.build()
			.unwrap(),
		SettingDefinition::builder("B").default_value("y").visible(false).build().unwrap(),
		SettingDefinition::builder("C").default_value("z").provider("U").build().unwrap(),
	])
}

/// Store wrapper that fails writes (and optionally reads) for selected names
#[derive(Debug, Default)]
pub struct FlakyStore {
	pub inner: MemorySettingStore,
	fail_set: Mutex<HashSet<String>>,
	fail_reads: Mutex<bool>,
	pub reads: Mutex<usize>,
}

impl FlakyStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn fail_set_for(&self, name: &str) {
		self.fail_set.lock().insert(name.to_string());
	}

	pub fn fail_reads(&self, fail: bool) {
		*self.fail_reads.lock() = fail;
	}

	pub fn read_count(&self) -> usize {
		*self.reads.lock()
	}

	fn check_reads(&self) -> SmResult<()> {
		if *self.fail_reads.lock() {
			return Err(Error::StoreUnavailable("injected read failure".into()));
		}
		Ok(())
	}
}

#[async_trait]
impl SettingStoreAdapter for FlakyStore {
	async fn get_or_null(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<Option<String>> {
		self.check_reads()?;
		*self.reads.lock() += 1;
		self.inner.get_or_null(name, provider_name, provider_key).await
	}

	async fn list_global(&self) -> SmResult<Vec<SettingValue>> {
		self.check_reads()?;
		self.inner.list_global().await
	}

	async fn list_for_tenant(&self, tenant_id: TenantId) -> SmResult<Vec<SettingValue>> {
		self.check_reads()?;
		self.inner.list_for_tenant(tenant_id).await
	}

	async fn list_for_user(&self, user_id: UserId) -> SmResult<Vec<SettingValue>> {
		self.check_reads()?;
		self.inner.list_for_user(user_id).await
	}

	async fn set(
		&self,
		name: &str,
		value: Option<&str>,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<()> {
		if self.fail_set.lock().contains(name) {
			return Err(Error::StoreUnavailable(format!("injected write failure for {}", name)));
		}
		self.inner.set(name, value, provider_name, provider_key).await
	}
}

/// Store wrapper whose next single-value read stops after reading the inner store
///
/// `pause_next_read` arms it. The armed read signals `read_done` once it holds its
/// value, then waits for `resume` before returning.
#[derive(Debug, Default)]
pub struct PausingStore {
	pub inner: MemorySettingStore,
	armed: AtomicBool,
	pub read_done: Notify,
	pub resume: Notify,
}

impl PausingStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn pause_next_read(&self) {
		self.armed.store(true, Ordering::SeqCst);
	}
}

#[async_trait]
impl SettingStoreAdapter for PausingStore {
	async fn get_or_null(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<Option<String>> {
		let value = self.inner.get_or_null(name, provider_name, provider_key).await?;
		if self.armed.swap(false, Ordering::SeqCst) {
			self.read_done.notify_one();
			self.resume.notified().await;
		}
		Ok(value)
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

	async fn set(
		&self,
		name: &str,
		value: Option<&str>,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<()> {
		self.inner.set(name, value, provider_name, provider_key).await
	}
}

/// Cache wrapper that can be switched to fail every call
#[derive(Debug)]
pub struct FlakyCache {
	pub inner: LruSettingCache,
	failing: Mutex<bool>,
}

impl FlakyCache {
	pub fn new() -> Self {
		Self { inner: LruSettingCache::new(100), failing: Mutex::new(false) }
	}

	pub fn set_failing(&self, failing: bool) {
		*self.failing.lock() = failing;
	}

	fn check(&self) -> SmResult<()> {
		if *self.failing.lock() {
			return Err(Error::CacheUnavailable("injected cache failure".into()));
		}
		Ok(())
	}
}

#[async_trait]
impl SettingCacheAdapter for FlakyCache {
	async fn get(&self, key: &str) -> SmResult<Option<SettingCacheItem>> {
		self.check()?;
		self.inner.get(key).await
	}

	async fn set(&self, key: &str, item: SettingCacheItem) -> SmResult<()> {
		self.check()?;
		self.inner.set(key, item).await
	}
}

// vim: ts=4
