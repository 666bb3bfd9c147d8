mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod progress;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run_app().await {
        eprintln!("\nError: {e}");
        std::process::exit(1);
    }
}

async fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("foldcast v{} starting up", env!("CARGO_PKG_VERSION"));
    debug!("Parsed CLI arguments: {:?}", &cli);

    let result = match cli.command {
        Commands::Predict(args) => commands::predict::run(args).await,
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Inspect(args) => commands::inspect::run(args),
    };

    if let Err(e) = &result {
        error!("Command failed: {e}");
    }
    result
}
