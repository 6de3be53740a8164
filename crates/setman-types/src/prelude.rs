pub use crate::error::{Error, SmResult};
pub use crate::types::{TenantId, Timestamp, UserId};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
