//! In-memory setting store
//!
//! Keeps every override in a single ordered map keyed by
//! `(provider name, provider key, setting name)`. Suitable for tests, demos, and
//! single-process deployments that seed their values at startup.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use setman_types::prelude::*;
use setman_types::store_adapter::SettingStoreAdapter;
use setman_types::types::{SettingValue, provider};

type ScopeKey = (String, String, String);

#[derive(Debug, Default)]
pub struct MemorySettingStore {
	values: RwLock<BTreeMap<ScopeKey, String>>,
}

impl MemorySettingStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of stored overrides across all scopes
	pub fn len(&self) -> usize {
		self.values.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.read().is_empty()
	}

	/// Values under one scope, ordered by setting name
	fn list_scope(&self, provider_name: &str, provider_key: &str) -> Vec<SettingValue> {
		self.values
			.read()
			.iter()
			.filter(|((pn, pk, _), _)| pn == provider_name && pk == provider_key)
			.map(|((_, _, name), value)| SettingValue::new(name.clone(), Some(value.clone())))
			.collect()
	}
}

#[async_trait]
impl SettingStoreAdapter for MemorySettingStore {
	async fn get_or_null(
		&self,
		name: &str,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<Option<String>> {
		let key = (provider_name.to_string(), provider_key.to_string(), name.to_string());
		Ok(self.values.read().get(&key).cloned())
	}

	async fn list_global(&self) -> SmResult<Vec<SettingValue>> {
		Ok(self.list_scope(provider::GLOBAL, ""))
	}

	async fn list_for_tenant(&self, tenant_id: TenantId) -> SmResult<Vec<SettingValue>> {
		Ok(self.list_scope(provider::TENANT, &tenant_id.to_string()))
	}

	async fn list_for_user(&self, user_id: UserId) -> SmResult<Vec<SettingValue>> {
		Ok(self.list_scope(provider::USER, &user_id.to_string()))
	}

	async fn set(
		&self,
		name: &str,
		value: Option<&str>,
		provider_name: &str,
		provider_key: &str,
	) -> SmResult<()> {
		let key = (provider_name.to_string(), provider_key.to_string(), name.to_string());
		let mut values = self.values.write();
		match value {
			Some(value) => {
				values.insert(key, value.to_string());
			}
			None => {
				values.remove(&key);
			}
		}
		debug!(name = %name, provider = %provider_name, key = %provider_key, "Stored setting");
		Ok(())
	}
}

// vim: ts=4
