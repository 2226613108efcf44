//! Turso/libSQL remote store configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TursoConfig {
    /// Database URL (e.g., `libsql://campo-prod-myorg.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Database auth token for the current user session.
    #[serde(default)]
    pub auth_token: String,

    /// Local database file used when no remote is configured.
    /// Empty means the platform data directory (`campo/campo.db`).
    #[serde(default)]
    pub local_path: String,
}

impl TursoConfig {
    /// Check if the Turso config has the minimum required fields for remote access.
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Check if an explicit local database path is set.
    pub fn has_local_path(&self) -> bool {
        !self.local_path.is_empty()
    }
}
