//! Session identity configuration.
//!
//! Authentication itself is delegated to the hosted provider; Campo only
//! needs the resolved user id that owns the rows it reads and writes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Authenticated user id. Empty means no active session.
    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub email: String,
}

impl AuthConfig {
    pub fn is_authenticated(&self) -> bool {
        !self.user_id.trim().is_empty()
    }
}
