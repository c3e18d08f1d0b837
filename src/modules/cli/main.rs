//! bindcheck CLI
//!
//! Command-line entry point for the service-binding connectivity check.

use bindcheck_cli::{Cli, Commands};
use bindcheck_core::BindcheckError;
use bindcheck_parser::EnvSource;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), BindcheckError> {
    // Before parsing so `.env` can supply PORT and friends
    let dotenv = EnvSource::load_dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    let config = cli.server_config();
    match cli.command.unwrap_or_default() {
        Commands::Run(cmd) => {
            cmd.execute(config).await?;
        }
        Commands::Check(cmd) => {
            cmd.execute(config).await?;
        }
    }

    Ok(())
}
