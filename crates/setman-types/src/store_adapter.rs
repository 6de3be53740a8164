//! Setting store adapter
//!
//! The store is the authoritative source of setting values. setman never persists
//! anything itself; every durable read and write goes through this trait.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::SettingValue;

/// A setman setting store
///
/// Implementations must be safe to share across concurrent callers. setman performs no
/// client-side locking; concurrent writes to the same key are resolved by the store.
#[async_trait]
pub trait SettingStoreAdapter: Debug + Send + Sync {
	/// Reads the value stored for `name` under `(provider_name, provider_key)`.
	/// Returns `Ok(None)` when there is no override at that scope.
	async fn get_or_null(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<Option<String>>;

	/// # Batch reads
	/// Lists every value stored at global scope
	async fn list_global(&self) -> SmResult<Vec<SettingValue>>;

	/// Lists every value stored for a tenant
	async fn list_for_tenant(&self, tenant_id: TenantId) -> SmResult<Vec<SettingValue>>;

	/// Lists every value stored for a user
	async fn list_for_user(&self, user_id: UserId) -> SmResult<Vec<SettingValue>>;

	/// Writes (or with `None`, clears) the value for `name` under `(provider_name, provider_key)`
	async fn set(
		&self,
		name: &str,
		value: Option<&str>,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<()>;
}

// vim: ts=4
