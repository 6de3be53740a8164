//! Localization hook for display names and descriptions
//!
//! Definitions carry opaque localization keys. Turning a key into a display string is
//! left to the embedding application; setman only calls `localize` while assembling
//! `SettingDto`s.

use std::collections::HashMap;

pub trait Localizer: Send + Sync {
	fn localize(&self, key: &str) -> String;
}

impl<F> Localizer for F
where
	F: Fn(&str) -> String + Send + Sync,
{
	fn localize(&self, key: &str) -> String {
		self(key)
	}
}

/// Returns keys unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyLocalizer;

impl Localizer for KeyLocalizer {
	fn localize(&self, key: &str) -> String {
		key.to_string()
	}
}

/// Lookup table, falling back to the key itself for unknown entries
#[derive(Debug, Clone, Default)]
pub struct MapLocalizer {
	texts: HashMap<String, String>,
}

impl MapLocalizer {
	pub fn new(texts: HashMap<String, String>) -> Self {
		Self { texts }
	}
}

impl Localizer for MapLocalizer {
	fn localize(&self, key: &str) -> String {
		self.texts.get(key).cloned().unwrap_or_else(|| key.to_string())
	}
}


// vim: ts=4
