//! # Connection Management
//!
//! Opens the SQLite store and owns its single long-lived connection.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Lifecycle                                    │
//! │                                                                         │
//! │  Process Startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(path) ← Path, timeouts, search case                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await                                            │
//! │       ├── open/create file ──── fails? ──► DbError::OpenFailed          │
//! │       └── bootstrap schema ──── fails? ──► DbError::SchemaFailed        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────┐                                        │
//! │  │  SqlitePool (exactly 1 conn)│ ◄── db.products() borrows it           │
//! │  └─────────────────────────────┘                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.close().await ← orderly shutdown (drop also releases it)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One Connection
//! The store is driven from a single logical thread, one statement at a time.
//! The pool is pinned to one connection with no idle timeout and no max
//! lifetime, so it behaves as a single handle held for the whole run. This
//! also keeps `:memory:` databases alive between statements.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::product::{ProductRepository, SearchCase};

const IN_MEMORY_PATH: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("inventory.db")
///     .search_case(SearchCase::Sensitive);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file. Created if it doesn't exist.
    pub database_path: PathBuf,

    /// How long to wait for the connection.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Whether to bootstrap the schema on connect.
    /// Default: true
    pub run_migrations: bool,

    /// Case handling for name matching in search.
    /// Default: [`SearchCase::Insensitive`]
    pub search_case: SearchCase,
}

impl DbConfig {
    /// Creates a new database configuration with the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            connect_timeout: Duration::from_secs(30),
            run_migrations: true,
            search_case: SearchCase::default(),
        }
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Sets case handling for search.
    pub fn search_case(mut self, case: SearchCase) -> Self {
        self.search_case = case;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Each `Database` built from it is isolated from every other.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(IN_MEMORY_PATH),
            connect_timeout: Duration::from_secs(5),
            run_migrations: true,
            search_case: SearchCase::default(),
        }
    }

    /// Whether this config points at an in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(IN_MEMORY_PATH)
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        if self.is_in_memory() {
            return SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::OpenFailed(e.to_string()));
        }

        Ok(SqliteConnectOptions::new()
            .filename(&self.database_path)
            // Create file if it doesn't exist
            .create_if_missing(true)
            // WAL mode: crash-safe appends, cheap reads
            .journal_mode(SqliteJournalMode::Wal)
            // NORMAL synchronous: safe from corruption, may lose last write on power loss
            .synchronous(SqliteSynchronous::Normal))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to an open inventory store.
///
/// Owned by the process's top-level assembly and passed by reference to
/// whatever issues product operations. There is no global handle.
#[derive(Debug, Clone)]
pub struct Database {
    /// Single-connection SQLite pool.
    pool: SqlitePool,

    /// Case handling handed to every repository.
    search_case: SearchCase,
}

impl Database {
    /// Opens (or creates) the store and bootstraps its schema.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Opens exactly one connection
    /// 3. Creates the `products` table if absent (when `run_migrations` is set)
    ///
    /// Calling this again on the same path keeps all existing rows.
    ///
    /// ## Errors
    /// * [`DbError::OpenFailed`] - The file could not be opened or created
    /// * [`DbError::SchemaFailed`] - The table could not be created
    ///
    /// Both are fatal for startup. On a schema failure the connection is
    /// closed before returning.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        let connect_options = config.connect_options()?;

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::OpenFailed(e.to_string()))?;

        info!("Database connection opened");

        let db = Database {
            pool,
            search_case: config.search_case,
        };

        if config.run_migrations {
            if let Err(e) = db.run_migrations().await {
                db.close().await;
                return Err(e);
            }
        }

        Ok(db)
    }

    /// Creates the schema if it is missing.
    ///
    /// Called by [`Database::new`] unless migrations are disabled in config.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    ///
    /// Prefer repository methods; this is for diagnostics.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let products = db.products().search("Wid").await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone(), self.search_case)
    }

    /// Closes the connection.
    ///
    /// After calling close, all repository operations fail.
    pub async fn close(&self) {
        info!("Closing database connection");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{NewProduct, Product};

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
        assert_eq!(migrations::migration_status(db.pool()).await.unwrap(), (1, 1));
    }

    #[tokio::test]
    async fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .connect_timeout(Duration::from_secs(1))
            .run_migrations(false)
            .search_case(SearchCase::Sensitive);

        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert!(!config.run_migrations);
        assert_eq!(config.search_case, SearchCase::Sensitive);
        assert!(!config.is_in_memory());
        assert!(DbConfig::in_memory().is_in_memory());
    }

    #[tokio::test]
    async fn test_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        db.close().await;

        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.db");

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let added = db
            .products()
            .insert(&NewProduct::new("Widget", 10, 2.5))
            .await
            .unwrap();
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let all = db.products().list_all().await.unwrap();
        assert_eq!(all, vec![added]);
        assert_eq!(migrations::migration_status(db.pool()).await.unwrap(), (1, 1));
        db.close().await;
    }

    #[tokio::test]
    async fn test_opens_legacy_file_without_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.db");

        // A store created by an earlier tool: table present, no _sqlx_migrations
        let db = Database::new(DbConfig::new(&path).run_migrations(false))
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                quantity INTEGER NOT NULL,
                price REAL NOT NULL
            )",
        )
        .execute(db.pool())
        .await
        .unwrap();
        sqlx::query("INSERT INTO products (name, quantity, price) VALUES ('Gadget', 3, 9.99)")
            .execute(db.pool())
            .await
            .unwrap();
        db.close().await;

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        let all = db.products().list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Gadget");
        db.close().await;
    }

    #[tokio::test]
    async fn test_unreachable_path_is_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("inventory.db");

        let err = Database::new(DbConfig::new(path).connect_timeout(Duration::from_secs(2)))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::OpenFailed(_)), "got {err:?}");
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_non_database_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-db.db");
        std::fs::write(&path, b"this is definitely not a sqlite file, just plain text padding it out")
            .unwrap();

        let err = Database::new(DbConfig::new(path).connect_timeout(Duration::from_secs(2)))
            .await
            .unwrap_err();

        assert!(err.is_fatal(), "got {err:?}");
    }

    #[tokio::test]
    async fn test_operations_fail_after_close() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
        let err = db
            .products()
            .insert(&NewProduct::new("Widget", 1, 1.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::WriteFailed(_)));

        // A failed write is never mistaken for a missing row
        let product = Product::from_new(1, NewProduct::new("Widget", 1, 1.0));
        let err = db.products().update(&product).await.unwrap_err();
        assert!(matches!(err, DbError::WriteFailed(_)), "got {err:?}");

        let err = db.products().delete(1).await.unwrap_err();
        assert!(matches!(err, DbError::WriteFailed(_)), "got {err:?}");

        let err = db.products().list_all().await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_schema_conflict_is_schema_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conflict.db");

        // An index already owns the name the table needs
        let db = Database::new(DbConfig::new(&path).run_migrations(false))
            .await
            .unwrap();
        sqlx::query("CREATE TABLE t (x INTEGER)")
            .execute(db.pool())
            .await
            .unwrap();
        sqlx::query("CREATE INDEX products ON t (x)")
            .execute(db.pool())
            .await
            .unwrap();
        db.close().await;

        let err = Database::new(DbConfig::new(&path)).await.unwrap_err();

        assert!(matches!(err, DbError::SchemaFailed(_)), "got {err:?}");
        assert!(err.is_fatal());
    }
}
