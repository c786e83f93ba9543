//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Categorized by the phase that failed           │
//! │       │                                                                 │
//! │       ├── OpenFailed / SchemaFailed ──► fatal, process exits non-zero   │
//! │       │                                                                 │
//! │       └── NotFound / WriteFailed / QueryFailed ──► reported, recoverable│
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Target row does not exist.
    ///
    /// ## When This Occurs
    /// - `update` or `delete` matched zero rows
    ///
    /// Lookups (`get_by_id`) report absence as `Ok(None)` instead.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The backing file could not be opened or created.
    ///
    /// ## When This Occurs
    /// - Parent directory doesn't exist
    /// - File permissions issue
    /// - File is not a SQLite database
    #[error("Failed to open database: {0}")]
    OpenFailed(String),

    /// Schema bootstrap failed.
    #[error("Failed to create schema: {0}")]
    SchemaFailed(String),

    /// An INSERT, UPDATE or DELETE could not execute.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// A SELECT could not execute.
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Wraps a driver error raised by a write statement.
    pub fn write(err: sqlx::Error) -> Self {
        DbError::WriteFailed(err.to_string())
    }

    /// Whether this error should abort startup.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DbError::OpenFailed(_) | DbError::SchemaFailed(_))
    }
}

/// Convert sqlx errors raised by read statements.
///
/// Writes go through [`DbError::write`] and connection setup maps to
/// [`DbError::OpenFailed`] explicitly, so everything landing here is a
/// failed query.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            _ => DbError::QueryFailed(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::SchemaFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
