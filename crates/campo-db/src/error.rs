//! Database error types for campo-db.

use campo_core::errors::CoreError;
use thiserror::Error;

/// Generic text shown to users for failures they cannot act on.
pub const GENERIC_FAILURE: &str = "Something went wrong while talking to the server. Please try again.";

/// Errors from record services and report procedures.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// No authenticated user is attached to the service.
    #[error("Not authenticated: sign in to continue")]
    Unauthenticated,

    /// Input failed local validation. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    /// The row does not exist or belongs to another user.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// A report procedure failed. Wraps the remote message without exposing it
    /// as the primary error.
    #[error("Report '{procedure}' failed: {message}")]
    Report { procedure: String, message: String },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., a disallowed status transition).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the failure came from the store rather than from the caller.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Report { .. }
                | Self::Query(_)
                | Self::Migration(_)
                | Self::NoResult
                | Self::LibSql(_)
                | Self::Other(_)
        )
    }

    /// Text suitable for an end user.
    ///
    /// Caller-side failures render verbatim; store failures collapse to
    /// [`GENERIC_FAILURE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_upstream() {
            GENERIC_FAILURE.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => Self::Validation(message),
            CoreError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            CoreError::Other(err) => Self::Other(err),
        }
    }
}
