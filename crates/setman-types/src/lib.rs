//! Shared types, adapter traits, and error types for setman.
//!
//! Adapter crates depend only on this crate, so store and cache implementations
//! can be built without pulling in the resolution engine.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod cache_adapter;
pub mod error;
pub mod localizer;
pub mod prelude;
pub mod store_adapter;
pub mod types;

// vim: ts=4
