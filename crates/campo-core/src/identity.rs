use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Lightweight authenticated user identity for cross-crate passing.
///
/// Resolved by the hosting surface (CLI flag, config, or the auth provider in
/// front of the server) and consumed by `campo-db`, which scopes every query to
/// `user_id`. Contains only data fields, no auth logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuthIdentity {
    /// Owner key stored on every row.
    pub user_id: String,
    /// Display email, when the auth provider supplies one.
    pub email: Option<String>,
}

impl AuthIdentity {
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: None,
        }
    }
}
