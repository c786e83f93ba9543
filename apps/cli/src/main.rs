//! # Inventory Binary Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (stderr)
//! 2. Parse arguments
//! 3. Run one command (setup lives in lib.rs for testability)
//! 4. Map the outcome to an exit status

use clap::Parser;
use std::process::ExitCode;

use inventory_cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    inventory_cli::init_tracing();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout();

    match inventory_cli::run(cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_status())
        }
    }
}
