//! Setting resolution and cache coherence for setman.
//!
//! # Architecture
//!
//! - **Settings** (`settings`): definition metadata and the frozen registry
//! - **Cache keys** (`cache_key`): injective `(name, provider, key)` encoding
//! - **Resolver** (`resolver`): effective values per scope, filtered by definitions
//! - **Update coordinator** (`update`): store-then-cache writes with per-item results
//! - **Cached store** (`cached_store`): read-through cache in front of the store
//! - **Application service** (`app_service`): permission-checked entry points
//!
//! Persistence and caching are delegated to `SettingStoreAdapter` and
//! `SettingCacheAdapter` implementations from setman-types.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod access;
pub mod app_service;
pub mod bootstrap;
pub mod cache_key;
pub mod cached_store;
pub mod config;
pub mod prelude;
pub mod resolver;
pub mod settings;
pub mod update;

pub use access::{RequestCtx, SettingPermission};
pub use app_service::SettingAppService;
pub use config::ServiceConfig;
pub use resolver::SettingResolver;
pub use update::{SettingUpdateCoordinator, UpdateItemResult, UpdateReport, UpdateStatus};

// vim: ts=4
