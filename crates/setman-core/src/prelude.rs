pub use setman_types::error::{Error, SmResult};
pub use setman_types::types::{TenantId, Timestamp, UserId};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
