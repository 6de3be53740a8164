//! Authorization boundary
//!
//! The resolver and coordinator assume their caller is authorized. The application
//! service checks these permissions first, against a `RequestCtx` the transport layer
//! builds from the authenticated request.

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Permissions guarding the setting endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingPermission {
	/// Read settings of a scope
	#[serde(rename = "SettingManagement.Settings")]
	Default,
	/// Modify settings
	#[serde(rename = "SettingManagement.Settings.Manager")]
	Manager,
}

impl SettingPermission {
	pub fn name(&self) -> &'static str {
		match self {
			SettingPermission::Default => "SettingManagement.Settings",
			SettingPermission::Manager => "SettingManagement.Settings.Manager",
		}
	}

	/// Check if the granted permission names satisfy this permission
	pub fn check<S: AsRef<str>>(&self, granted: &[S]) -> bool {
		granted.iter().any(|p| p.as_ref() == self.name())
	}
}

/// Caller context for a single request
///
/// Carries what would otherwise be ambient: the current tenant, the current user, and
/// the permissions granted to them.
#[derive(Debug, Clone, Default)]
pub struct RequestCtx {
	pub tenant_id: Option<TenantId>,
	pub user_id: Option<UserId>,
	pub permissions: Box<[Box<str>]>,
}

impl RequestCtx {
	pub fn anonymous() -> Self {
		Self::default()
	}

	pub fn with_tenant(mut self, tenant_id: TenantId) -> Self {
		self.tenant_id = Some(tenant_id);
		self
	}

	pub fn with_user(mut self, user_id: UserId) -> Self {
		self.user_id = Some(user_id);
		self
	}

	pub fn grant(mut self, permission: SettingPermission) -> Self {
		let mut permissions = self.permissions.into_vec();
		permissions.push(permission.name().into());
		self.permissions = permissions.into_boxed_slice();
		self
	}

	pub fn require(&self, permission: SettingPermission) -> SmResult<()> {
		if permission.check(&self.permissions) {
			Ok(())
		} else {
			warn!(
				permission = permission.name(),
				user = ?self.user_id,
				"Permission denied for setting operation"
			);
			Err(Error::PermissionDenied)
		}
	}
}


// vim: ts=4
