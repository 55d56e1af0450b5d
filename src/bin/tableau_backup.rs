// Tableau Server Backup Tool - CLI Binary
// Run with: cargo run --bin tableau-backup -- backup <site>

use clap::Parser;
use std::process::ExitCode;
use tableau_backup::cli::{runner, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match runner::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if tracing::dispatcher::has_been_set() {
                tracing::error!("{:#}", e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
