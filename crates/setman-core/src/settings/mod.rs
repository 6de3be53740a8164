//! Setting definition subsystem
//!
//! - **Types** (`types.rs`): definitions, builder, and the registry
//!
//! Definitions are registered during bootstrap into a `SettingsRegistry`, which is then
//! frozen into a `FrozenSettingsRegistry` and shared behind an `Arc`.

pub mod types;

pub use types::{
	FrozenSettingsRegistry, SettingDefinition, SettingDefinitionBuilder, SettingsRegistry,
};

// vim: ts=4
