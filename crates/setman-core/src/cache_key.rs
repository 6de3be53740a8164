//! Cache key codec
//!
//! Maps `(name, provider name, provider key)` to a single cache key string. The
//! provider name and provider key are length-prefixed, so any component may contain
//! the separators without two different triples ever producing the same key:
//!
//! ```text
//! pn:<len>:<provider name>,pk:<len>:<provider key>,n:<name>
//! ```
//!
//! Every writer and reader of the setting cache must derive keys through here.

const PROVIDER_NAME_TAG: &str = "pn:";
const PROVIDER_KEY_TAG: &str = ",pk:";
const NAME_TAG: &str = ",n:";

/// Encode the cache key for a setting at a provider scope
pub fn encode(name: &str, provider_name: &str, provider_key: &str) -> String {
	format!(
		"{}{}:{}{}{}:{}{}{}",
		PROVIDER_NAME_TAG,
		provider_name.len(),
		provider_name,
		PROVIDER_KEY_TAG,
		provider_key.len(),
		provider_key,
		NAME_TAG,
		name
	)
}


// vim: ts=4
