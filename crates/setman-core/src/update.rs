//! Update coordinator
//!
//! Applies a batch of setting updates at one provider scope. Items are processed in
//! the order given and each item is independent:
//!
//! 1. the name is checked against the registry (and the definition's providers),
//! 2. the value is written to the store,
//! 3. the cache entry for the item is overwritten with the new value.
//!
//! The cache is only written after the store write succeeded, so it never holds a
//! value the store did not accept. A failing item does not stop the batch and
//! earlier items are not rolled back; callers inspect the per-item results.
//!
//! There is no locking across calls. Between steps 2 and 3 a concurrent reader may
//! still see the previous cached value, and two concurrent updates of the same key
//! end with whichever finished its cache write last.

use std::sync::Arc;

use setman_types::cache_adapter::SettingCacheAdapter;
use setman_types::store_adapter::SettingStoreAdapter;
use setman_types::types::{SettingCacheItem, UpdateSettingItem};

use crate::cache_key;
use crate::prelude::*;
use crate::settings::FrozenSettingsRegistry;

/// Outcome of a single item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
	/// Store and cache both hold the new value
	Applied,
	/// Rejected before any write (unknown name, provider not allowed)
	Rejected(Error),
	/// Store write failed; cache left untouched
	StoreFailed(Error),
	/// Store write is durable but the cache could not be overwritten, so cached reads
	/// may return the previous value until the entry is evicted or rewritten
	CacheFailed(Error),
}

impl UpdateStatus {
	pub fn is_applied(&self) -> bool {
		matches!(self, UpdateStatus::Applied)
	}

	/// Whether the store accepted the write
	pub fn is_stored(&self) -> bool {
		matches!(self, UpdateStatus::Applied | UpdateStatus::CacheFailed(_))
	}

	/// Whether resubmitting the same item may succeed (a backend was unavailable)
	pub fn is_retryable(&self) -> bool {
		match self {
			UpdateStatus::StoreFailed(err) | UpdateStatus::CacheFailed(err) => err.is_transient(),
			UpdateStatus::Applied | UpdateStatus::Rejected(_) => false,
		}
	}

	pub fn error(&self) -> Option<&Error> {
		match self {
			UpdateStatus::Applied => None,
			UpdateStatus::Rejected(err)
			| UpdateStatus::StoreFailed(err)
			| UpdateStatus::CacheFailed(err) => Some(err),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateItemResult {
	pub name: String,
	pub status: UpdateStatus,
}

/// Per-item results, in the order the items were given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
	pub items: Vec<UpdateItemResult>,
}

impl UpdateReport {
	pub fn is_success(&self) -> bool {
		self.items.iter().all(|item| item.status.is_applied())
	}

	pub fn failures(&self) -> impl Iterator<Item = &UpdateItemResult> {
		self.items.iter().filter(|item| !item.status.is_applied())
	}

	/// Collapse to the first failure, for callers that want all-or-error reporting
	pub fn into_result(self) -> SmResult<()> {
		match self.items.into_iter().find_map(|item| item.status.error().cloned()) {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}
}

pub struct SettingUpdateCoordinator {
	registry: Arc<FrozenSettingsRegistry>,
	store: Arc<dyn SettingStoreAdapter>,
	cache: Arc<dyn SettingCacheAdapter>,
}

impl SettingUpdateCoordinator {
	pub fn new(
		registry: Arc<FrozenSettingsRegistry>,
		store: Arc<dyn SettingStoreAdapter>,
		cache: Arc<dyn SettingCacheAdapter>,
	) -> Self {
		Self { registry, store, cache }
	}

	pub async fn update(
		&self,
		provider_name: &str,
		provider_key: &str,
		items: &[UpdateSettingItem],
	) -> UpdateReport {
		let mut report = UpdateReport { items: Vec::with_capacity(items.len()) };

		for item in items {
			let status = self.update_item(provider_name, provider_key, item).await;
			if let Some(err) = status.error() {
				warn!(
					name = %item.name,
					provider = %provider_name,
					key = %provider_key,
					error = %err,
					retryable = status.is_retryable(),
					"Setting update failed"
				);
			}
			report.items.push(UpdateItemResult { name: item.name.clone(), status });
		}

		info!(
			provider = %provider_name,
			key = %provider_key,
			total = report.items.len(),
			failed = report.failures().count(),
			"Setting update batch finished"
		);
		report
	}

	async fn update_item(
		&self,
		provider_name: &str,
		provider_key: &str,
		item: &UpdateSettingItem,
	) -> UpdateStatus {
		let def = match self.registry.get(&item.name) {
			Ok(def) => def,
			Err(err) => return UpdateStatus::Rejected(err),
		};
		if !def.allows_provider(provider_name) {
			return UpdateStatus::Rejected(Error::ProviderNotAllowed {
				name: item.name.clone(),
				provider: provider_name.to_string(),
			});
		}

		if let Err(err) =
			self.store.set(&item.name, item.value.as_deref(), provider_name, provider_key).await
		{
			return UpdateStatus::StoreFailed(err);
		}

		let key = cache_key::encode(&item.name, provider_name, provider_key);
		match self.cache.set(&key, SettingCacheItem::new(item.value.clone())).await {
			Ok(()) => {
				debug!(key = %key, "Setting stored and cached");
				UpdateStatus::Applied
			}
			Err(err) => UpdateStatus::CacheFailed(err),
		}
	}
}

// vim: ts=4
