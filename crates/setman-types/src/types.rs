//! Common types used throughout setman

use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// Well-known provider names
///
/// A provider is the scope category a value is stored under. Applications may
/// define their own providers; these are the ones the service resolves itself.
pub mod provider {
	/// Instance-wide values
	pub const GLOBAL: &str = "G";
	/// Per-tenant values, keyed by tenant id
	pub const TENANT: &str = "T";
	/// Per-user values, keyed by user id
	pub const USER: &str = "U";
	/// Definition defaults
	pub const DEFAULT: &str = "D";
	/// Values coming from static configuration
	pub const CONFIGURATION: &str = "C";
}

// TenantId //
//**********//
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenantId(pub Uuid);

impl std::fmt::Display for TenantId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0.hyphenated())
	}
}

// UserId //
//********//
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0.hyphenated())
	}
}

// Timestamp //
//***********//
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Timestamp {
		let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
		Timestamp(i64::try_from(res.as_secs()).unwrap_or(i64::MAX))
	}

	pub fn add_seconds(&self, seconds: i64) -> Timestamp {
		Timestamp(self.0.saturating_add(seconds))
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A stored value at some scope, as returned by the setting store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingValue {
	pub name: String,
	pub value: Option<String>,
}

impl SettingValue {
	pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
		Self { name: name.into(), value }
	}
}

/// Cache payload for a single (name, provider, provider key) entry
///
/// `value: None` is an explicit "not set" marker, distinct from an empty string
/// and from a cache miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingCacheItem {
	pub value: Option<String>,
}

impl SettingCacheItem {
	pub fn new(value: Option<String>) -> Self {
		Self { value }
	}

	pub fn not_set() -> Self {
		Self { value: None }
	}

	pub fn is_set(&self) -> bool {
		self.value.is_some()
	}
}

/// Resolved setting as exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingDto {
	pub name: String,
	pub value: Option<String>,
	pub default_value: Option<String>,
	pub display_name: String,
	pub description: Option<String>,
}

/// One entry of an update batch. `value: None` clears the override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingItem {
	pub name: String,
	pub value: Option<String>,
}

impl UpdateSettingItem {
	pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
		Self { name: name.into(), value }
	}
}


// vim: ts=4
