//! # Inventory CLI Library
//!
//! Argument parsing, startup and shutdown for the `inventory` binary.
//!
//! ## Module Organization
//! ```text
//! inventory_cli/
//! ├── lib.rs          ◄─── You are here (Cli, run, logging)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command dispatch
//! │   ├── product.rs  ◄─── add / list / get / find / search / update / delete
//! │   └── seed.rs     ◄─── Demo data generator
//! └── error.rs        ◄─── CliError and exit statuses
//! ```
//!
//! ## Process Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Process Lifecycle                                 │
//! │                                                                         │
//! │  1. Initialize Logging (stderr, RUST_LOG)                               │
//! │  2. Parse arguments                                                     │
//! │  3. Open store at --db / INVENTORY_DB_PATH / ./inventory.db             │
//! │       └── failure ──► exit 1, nothing on stdout                         │
//! │  4. Run exactly one command                                             │
//! │  5. Close store (always, success or failure)                            │
//! │  6. Exit 0, or 2 for a reported operation failure                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::CliError;
use inventory_core::ProductId;
use inventory_db::{Database, DbConfig, SearchCase};

/// Store file used when neither `--db` nor `INVENTORY_DB_PATH` is given.
pub const DEFAULT_DB_PATH: &str = "inventory.db";

#[derive(Debug, Parser)]
#[command(name = "inventory")]
#[command(about = "Track products in a local SQLite inventory", long_about = None)]
pub struct Cli {
    /// Path to the store file (created if missing)
    #[arg(long, env = "INVENTORY_DB_PATH", default_value = DEFAULT_DB_PATH, global = true)]
    pub db: PathBuf,

    /// Match names in search case-sensitively
    #[arg(long, global = true)]
    pub case_sensitive: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a product and print it with its new id
    Add(ProductFields),
    /// Print every product
    List,
    /// Print one product by id
    Get { id: ProductId },
    /// Print the first product matching an id or name
    Find {
        #[arg(allow_hyphen_values = true)]
        keyword: String,
    },
    /// Print products whose id equals, or whose name contains, the keyword
    Search {
        #[arg(allow_hyphen_values = true)]
        keyword: String,
    },
    /// Replace name, quantity and price of a product
    Update {
        id: ProductId,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product by id
    Delete { id: ProductId },
    /// Fill an empty store with demo products
    Seed(commands::seed::SeedArgs),
}

/// Name, quantity and price as given on the command line.
///
/// Nothing is validated: negative quantities and prices are stored as-is.
#[derive(Debug, Clone, clap::Args)]
pub struct ProductFields {
    #[arg(allow_hyphen_values = true)]
    pub name: String,
    #[arg(allow_negative_numbers = true)]
    pub quantity: i64,
    #[arg(allow_negative_numbers = true)]
    pub price: f64,
}

impl Cli {
    /// Store configuration derived from the flags.
    pub fn db_config(&self) -> DbConfig {
        let case = if self.case_sensitive {
            SearchCase::Sensitive
        } else {
            SearchCase::Insensitive
        };
        DbConfig::new(&self.db).search_case(case)
    }
}

/// Opens the store, runs the command, closes the store.
///
/// Output goes to `out`. A startup failure returns before anything is
/// written; every other path closes the store before returning.
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> Result<(), CliError> {
    info!(path = %cli.db.display(), "Starting inventory");

    let db = Database::new(cli.db_config()).await?;

    let result = commands::execute(&db, cli.command, out).await;

    db.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout only carries command output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every statement
/// - `RUST_LOG=inventory_db=trace` - Store crate only
/// - Default: warnings, plus info from the inventory crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,inventory_db=info,inventory_cli=info,sqlx=warn"));

    // A second call (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use inventory_core::Product;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn invoke(db: &str, args: &[&str]) -> Cli {
        let mut full = vec!["inventory", "--db", db];
        full.extend_from_slice(args);
        parse(&full)
    }

    fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8(out.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_parse_add_with_negative_numbers() {
        let cli = parse(&["inventory", "--db", "x.db", "add", "Refund", "-2", "-1.5"]);
        match cli.command {
            Command::Add(fields) => {
                assert_eq!(fields.name, "Refund");
                assert_eq!(fields.quantity, -2);
                assert_eq!(fields.price, -1.5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.db, PathBuf::from("x.db"));
    }

    #[test]
    fn test_parse_update_and_flags() {
        let cli = parse(&["inventory", "update", "1", "Widget Pro", "5", "3.0", "--case-sensitive"]);
        assert!(cli.case_sensitive);
        assert_eq!(cli.db_config().search_case, SearchCase::Sensitive);
        assert!(matches!(cli.command, Command::Update { id: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_bad_id() {
        assert!(Cli::try_parse_from(["inventory", "get", "abc"]).is_err());
        assert!(Cli::try_parse_from(["inventory", "delete"]).is_err());
    }

    #[tokio::test]
    async fn test_startup_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("inventory.db");
        let cli = parse(&["inventory", "--db", path.to_str().unwrap(), "list"]);

        let mut out = Vec::<u8>::new();
        let err = run(cli, &mut out).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StartupFailed);
        assert_eq!(err.exit_status(), 1);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_scenario_across_processes() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("inventory.db");
        let db = db.to_str().unwrap();

        let mut out = Vec::<u8>::new();
        run(invoke(db, &["add", "Widget", "10", "2.5"]), &mut out).await.unwrap();
        let added: Product = serde_json::from_str(&lines(&out)[0]).unwrap();
        assert_eq!(added.id, 1);

        let mut out = Vec::<u8>::new();
        run(invoke(db, &["search", "1"]), &mut out).await.unwrap();
        assert_eq!(lines(&out), vec![r#"{"id":1,"name":"Widget","quantity":10,"price":2.5}"#]);

        let mut out = Vec::<u8>::new();
        run(invoke(db, &["update", "1", "Widget Pro", "5", "3.0"]), &mut out)
            .await
            .unwrap();

        let mut out = Vec::<u8>::new();
        run(invoke(db, &["get", "1"]), &mut out).await.unwrap();
        assert_eq!(lines(&out), vec![r#"{"id":1,"name":"Widget Pro","quantity":5,"price":3.0}"#]);

        let mut out = Vec::<u8>::new();
        run(invoke(db, &["delete", "1"]), &mut out).await.unwrap();

        let mut out = Vec::<u8>::new();
        let err = run(invoke(db, &["get", "1"]), &mut out).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.exit_status(), 2);

        let mut out = Vec::<u8>::new();
        let err = run(invoke(db, &["delete", "1"]), &mut out).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
