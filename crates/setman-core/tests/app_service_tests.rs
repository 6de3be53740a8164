//! Application service tests: permission checks and request context handling

mod common;

use std::sync::Arc;

use setman_core::access::{RequestCtx, SettingPermission};
use setman_core::app_service::SettingAppService;
use setman_types::error::Error;
use setman_types::localizer::KeyLocalizer;
use setman_types::types::{TenantId, UpdateSettingItem, UserId, provider};
use uuid::Uuid;

use common::{FlakyCache, FlakyStore, sample_registry, setup_test_logging};

fn service() -> (Arc<FlakyStore>, SettingAppService) {
	setup_test_logging();
	let store = Arc::new(FlakyStore::new());
	let service = SettingAppService::new(
		sample_registry(),
		store.clone(),
		Arc::new(FlakyCache::new()),
		Arc::new(KeyLocalizer),
	);
	(store, service)
}

fn reader() -> RequestCtx {
	RequestCtx::anonymous().grant(SettingPermission::Default)
}

fn manager() -> RequestCtx {
	reader().grant(SettingPermission::Manager)
}

#[tokio::test]
async fn test_get_requires_default_permission() {
	let (_store, service) = service();
	let err = service.get(&RequestCtx::anonymous(), "web", "k").await.unwrap_err();
	assert_eq!(err, Error::PermissionDenied);

	let settings = service.get(&reader(), "web", "k").await.unwrap();
	assert_eq!(settings.len(), 1);
}

#[tokio::test]
async fn test_update_requires_manager_permission() {
	let (store, service) = service();
	let items = [UpdateSettingItem::new("A", Some("v".to_string()))];

	let err = service.update(&reader(), "web", "k", &items).await.unwrap_err();
	assert_eq!(err, Error::PermissionDenied);
	assert!(store.inner.is_empty());

	let report = service.update(&manager(), "web", "k", &items).await.unwrap();
	assert!(report.is_success());

	let settings = service.get(&reader(), "web", "k").await.unwrap();
	assert_eq!(settings[0].value.as_deref(), Some("v"));
}

#[tokio::test]
async fn test_global_is_anonymous() {
	let (_store, service) = service();
	service
		.update(
			&manager(),
			provider::GLOBAL,
			"",
			&[UpdateSettingItem::new("A", Some("g".to_string()))],
		)
		.await
		.unwrap();

	let settings = service.get_all_global().await.unwrap();
	assert_eq!(settings.len(), 1);
	assert_eq!(settings[0].value.as_deref(), Some("g"));
}

#[tokio::test]
async fn test_tenant_uses_context_tenant() {
	let (_store, service) = service();
	let tenant = TenantId(Uuid::new_v4());
	service
		.update(
			&manager(),
			provider::TENANT,
			&tenant.to_string(),
			&[UpdateSettingItem::new("A", Some("t".to_string()))],
		)
		.await
		.unwrap();

	assert!(service.get_all_for_tenant(&reader()).await.unwrap().is_empty());

	let settings = service.get_all_for_tenant(&reader().with_tenant(tenant)).await.unwrap();
	assert_eq!(settings.len(), 1);
	assert_eq!(settings[0].value.as_deref(), Some("t"));
}

#[tokio::test]
async fn test_current_user_requires_user_in_context() {
	let (_store, service) = service();
	let user = UserId(Uuid::new_v4());
	service
		.update(
			&manager(),
			provider::USER,
			&user.to_string(),
			&[UpdateSettingItem::new("C", Some("mine".to_string()))],
		)
		.await
		.unwrap();

	assert_eq!(service.get_all_for_current_user(&reader()).await.unwrap_err(), Error::Unauthorized);

	let settings = service.get_all_for_current_user(&reader().with_user(user)).await.unwrap();
	assert_eq!(settings.len(), 1);
	assert_eq!(settings[0].name, "C");

	let by_id = service.get_all_for_user(&reader(), user).await.unwrap();
	assert_eq!(by_id, settings);
}

#[tokio::test]
async fn test_user_listing_requires_permission() {
	let (_store, service) = service();
	let err = service
		.get_all_for_user(&RequestCtx::anonymous(), UserId(Uuid::new_v4()))
		.await
		.unwrap_err();
	assert_eq!(err, Error::PermissionDenied);
}

// vim: ts=4
