//! Service layer scoping every operation to an authenticated user.
//!
//! `CampoService` wraps `CampoDb` (raw database access) and the current
//! `AuthIdentity`. All record and report methods are implemented as
//! `impl CampoService` blocks in `repos` and `reports`.

use std::sync::Arc;

use campo_core::identity::AuthIdentity;

use crate::CampoDb;
use crate::error::DatabaseError;

/// User-scoped access to the store.
///
/// Every operation follows this protocol:
/// 1. Require an authenticated user
/// 2. Validate input locally (advisory)
/// 3. Execute SQL filtered on `user_id`
/// 4. Log the write
///
/// The database handle is shared, so [`CampoService::with_identity`] can hand
/// out per-user services over one connection.
#[derive(Clone)]
pub struct CampoService {
    db: Arc<CampoDb>,
    identity: Option<AuthIdentity>,
}

impl CampoService {
    /// Create a service over a local database file (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = CampoDb::open_local(db_path).await?;
        Ok(Self::from_db(db, identity))
    }

    /// Create a service over a remote Turso database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the remote database cannot be reached.
    pub async fn new_remote(
        url: &str,
        auth_token: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = CampoDb::open_remote(url, auth_token).await?;
        Ok(Self::from_db(db, identity))
    }

    /// Create from an existing `CampoDb`.
    #[must_use]
    pub fn from_db(db: CampoDb, identity: Option<AuthIdentity>) -> Self {
        Self {
            db: Arc::new(db),
            identity,
        }
    }

    /// A service for another user sharing this database handle.
    #[must_use]
    pub fn with_identity(&self, identity: Option<AuthIdentity>) -> Self {
        Self {
            db: Arc::clone(&self.db),
            identity,
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub fn db(&self) -> &CampoDb {
        &self.db
    }

    /// The authenticated identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    /// The current user's ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unauthenticated` when no identity is attached
    /// or its user ID is blank.
    pub fn require_user(&self) -> Result<&str, DatabaseError> {
        self.identity
            .as_ref()
            .map(|identity| identity.user_id.as_str())
            .filter(|user_id| !user_id.trim().is_empty())
            .ok_or(DatabaseError::Unauthenticated)
    }
}
