//! Setting cache adapter
//!
//! A shared key/value cache in front of the setting store. Keys are produced by the
//! cache key codec in setman-core; payloads are `SettingCacheItem`s. Entries may be
//! evicted at any time, so every caller must treat a miss as normal.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::SettingCacheItem;

#[async_trait]
pub trait SettingCacheAdapter: Debug + Send + Sync {
	/// Returns the cached item, or `None` on a miss
	async fn get(&self, key: &str) -> SmResult<Option<SettingCacheItem>>;

	/// Stores `item` under `key`, overwriting any previous entry
	async fn set(&self, key: &str, item: SettingCacheItem) -> SmResult<()>;
}

// vim: ts=4
