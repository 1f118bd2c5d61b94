//! Database error types.

use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The remote store could not be reached.
    #[error("store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote store rejected a request.
    #[error("store rejected {table} request ({status}): {message}")]
    Rejected {
        table: &'static str,
        status: u16,
        message: String,
    },

    /// An insert succeeded but returned no row.
    #[error("Failed to create {entity}")]
    EmptyInsert { entity: &'static str },

    /// A stored JSON column could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Store client misconfiguration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
