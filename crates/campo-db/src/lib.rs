//! # campo-db
//!
//! libSQL/Turso access for Campo.
//!
//! Holds the record services for lots, weighings, expenses, sales and tasks,
//! and the report procedures that aggregate them. Every query is scoped to the
//! authenticated user carried by [`service::CampoService`].
//!
//! Uses the `libsql` crate (v0.9.29): a local file or `:memory:` database for
//! tests and offline use, or a remote Turso database over HTTP.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod reports;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and a single connection. Provides ID generation;
/// the record and report methods live on [`service::CampoService`].
pub struct CampoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    remote: bool,
}

impl CampoDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Per-connection in SQLite
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let campo_db = Self {
            db,
            conn,
            remote: false,
        };
        campo_db.run_migrations().await?;
        tracing::debug!(path, "opened local database");
        Ok(campo_db)
    }

    /// Open a remote Turso database.
    ///
    /// Migrations are idempotent and run on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;

        let campo_db = Self {
            db,
            conn,
            remote: true,
        };
        campo_db.run_migrations().await?;
        tracing::debug!(url, "opened remote database");
        Ok(campo_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle talks to a remote Turso database.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        self.remote
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"lot-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
