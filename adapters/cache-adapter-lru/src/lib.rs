//! LRU setting cache
//!
//! In-process `SettingCacheAdapter` with a fixed capacity and an optional time to
//! live. Expired entries read as a miss and are dropped on access.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

use async_trait::async_trait;
use lru::LruCache;
use std::num::NonZeroUsize;

use setman_types::cache_adapter::SettingCacheAdapter;
use setman_types::prelude::*;
use setman_types::types::SettingCacheItem;

/// Capacity used when a zero capacity is configured
const FALLBACK_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
struct CacheEntry {
	item: SettingCacheItem,
	expires_at: Option<Timestamp>,
}

impl CacheEntry {
	fn is_expired(&self) -> bool {
		self.expires_at.is_some_and(|expires_at| Timestamp::now() >= expires_at)
	}
}

#[derive(Debug)]
pub struct LruSettingCache {
	entries: parking_lot::RwLock<LruCache<String, CacheEntry>>,
	ttl_secs: Option<i64>,
}

impl LruSettingCache {
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity)
			.or(NonZeroUsize::new(FALLBACK_CAPACITY))
			.unwrap_or(NonZeroUsize::MIN);
		Self { entries: parking_lot::RwLock::new(LruCache::new(capacity)), ttl_secs: None }
	}

	/// Expire entries `ttl_secs` seconds after they were written
	pub fn with_ttl(mut self, ttl_secs: u64) -> Self {
		self.ttl_secs = Some(i64::try_from(ttl_secs).unwrap_or(i64::MAX));
		self
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Drop every entry
	pub fn clear(&self) {
		self.entries.write().clear();
	}
}

#[async_trait]
impl SettingCacheAdapter for LruSettingCache {
	async fn get(&self, key: &str) -> SmResult<Option<SettingCacheItem>> {
		let mut entries = self.entries.write();

		match entries.get(key) {
			Some(entry) if entry.is_expired() => {
				debug!(key = %key, "Setting cache entry expired");
				entries.pop(key);
				Ok(None)
			}
			Some(entry) => Ok(Some(entry.item.clone())),
			None => Ok(None),
		}
	}

	async fn set(&self, key: &str, item: SettingCacheItem) -> SmResult<()> {
		let expires_at = self.ttl_secs.map(|ttl| Timestamp::now().add_seconds(ttl));
		self.entries.write().put(key.to_string(), CacheEntry { item, expires_at });
		Ok(())
	}
}

// vim: ts=4
