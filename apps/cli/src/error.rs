//! # CLI Error Type
//!
//! Unified error type for commands, carrying the process exit status.
//!
//! ## Exit Statuses
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Outcome → Exit Status                                │
//! │                                                                         │
//! │  Command succeeded ───────────────────────────────────────────► 0       │
//! │                                                                         │
//! │  DbError::OpenFailed / SchemaFailed ─► STARTUP_FAILED ────────► 1       │
//! │                                                                         │
//! │  DbError::NotFound ──────────────────► NOT_FOUND ─────────────► 2       │
//! │  DbError::WriteFailed ───────────────► WRITE_FAILED ──────────► 2       │
//! │  DbError::QueryFailed ───────────────► QUERY_FAILED ──────────► 2       │
//! │  stdout write error ─────────────────► OUTPUT_FAILED ─────────► 2       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inventory_db::DbError;
use serde::Serialize;

/// Error returned from a CLI command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CliError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Store could not be opened or bootstrapped
    StartupFailed,

    /// Target product does not exist
    NotFound,

    /// Insert/update/delete could not execute
    WriteFailed,

    /// Read query could not execute
    QueryFailed,

    /// Result could not be written to stdout
    OutputFailed,
}

impl ErrorCode {
    /// Process exit status for this code.
    pub fn exit_status(self) -> u8 {
        match self {
            ErrorCode::StartupFailed => 1,
            _ => 2,
        }
    }
}

impl CliError {
    /// Creates a new CLI error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        CliError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Process exit status for this error.
    pub fn exit_status(&self) -> u8 {
        self.code.exit_status()
    }
}

/// Converts database errors to CLI errors.
impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CliError::not_found(&entity, id),
            e @ (DbError::OpenFailed(_) | DbError::SchemaFailed(_)) => {
                CliError::new(ErrorCode::StartupFailed, e.to_string())
            }
            e @ DbError::WriteFailed(_) => {
                tracing::error!(error = %e, "Write failed");
                CliError::new(ErrorCode::WriteFailed, e.to_string())
            }
            e @ DbError::QueryFailed(_) => {
                tracing::error!(error = %e, "Query failed");
                CliError::new(ErrorCode::QueryFailed, e.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::OutputFailed, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::new(ErrorCode::OutputFailed, err.to_string())
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CliError {}
