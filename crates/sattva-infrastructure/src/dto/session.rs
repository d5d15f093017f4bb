//! Current-user pointer DTO.

use crate::migration::MigrationChain;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Latest session-pointer schema version.
pub const SESSION_POINTER_VERSION: &str = "1.0.0";

/// The persisted current-user pointer: the id of the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPointerV1 {
    pub schema_version: String,
    pub user_id: String,
}

impl SessionPointerV1 {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            schema_version: SESSION_POINTER_VERSION.to_string(),
            user_id: user_id.into(),
        }
    }
}

/// The migration chain for the session pointer.
pub fn session_pointer_chain() -> MigrationChain {
    MigrationChain::new("session_pointer", Version::new(1, 0, 0))
}
