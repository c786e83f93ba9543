//! # Schema Bootstrap
//!
//! Embedded SQL migrations that create the `products` table.
//!
//! ## How Bootstrap Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bootstrap Process                                  │
//! │                                                                         │
//! │  Database::new                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Check _sqlx_migrations table (create if missing)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  001_create_products.sql                                                │
//! │       ├── fresh file        → CREATE TABLE products                     │
//! │       ├── already applied   → skipped                                   │
//! │       └── legacy file with products but no ledger                       │
//! │                             → IF NOT EXISTS makes it a no-op            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Rows already in the table are never touched                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Adding Migrations
//! Only the initial bootstrap exists. New files go in `migrations/sqlite/`
//! as `NNN_description.sql`; existing files are never edited.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::DbResult;

/// Embedded migrations from the workspace `migrations/sqlite` directory.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Runs all pending migrations.
///
/// Idempotent: a second run on the same file applies nothing and keeps
/// every row.
///
/// ## Errors
/// Returns [`DbError::SchemaFailed`](crate::DbError::SchemaFailed) when the
/// table cannot be created.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!("Checking for pending migrations");

    MIGRATOR.run(pool).await?;

    info!("All migrations applied successfully");
    Ok(())
}

/// Returns `(total_migrations, applied_migrations)`.
///
/// For diagnostics only. A missing ledger counts as zero applied; any
/// other failure is returned.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<(usize, usize)> {
    let total = MIGRATOR.migrations.len();

    let ledgers: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;

    if ledgers == 0 {
        return Ok((total, 0));
    }

    let applied: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await?;

    Ok((total, applied as usize))
}
