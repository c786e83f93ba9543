//! # Commands
//!
//! One function per subcommand. Each takes the open store by reference and
//! writes its result to `out` as JSON lines.

pub mod product;
pub mod seed;

use serde::Serialize;
use std::io::Write;

use crate::error::CliError;
use crate::Command;
use inventory_db::Database;

/// Dispatches a parsed command against the open store.
pub async fn execute<W: Write>(db: &Database, command: Command, out: &mut W) -> Result<(), CliError> {
    match command {
        Command::Add(fields) => product::add(db, fields, out).await,
        Command::List => product::list(db, out).await,
        Command::Get { id } => product::get(db, id, out).await,
        Command::Find { keyword } => product::find(db, &keyword, out).await,
        Command::Search { keyword } => product::search(db, &keyword, out).await,
        Command::Update { id, fields } => product::update(db, id, fields, out).await,
        Command::Delete { id } => product::delete(db, id, out).await,
        Command::Seed(args) => seed::execute(db, args, out).await,
    }
}

/// Writes one value as a single JSON line.
pub(crate) fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
