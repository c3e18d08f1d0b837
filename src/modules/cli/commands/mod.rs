//! CLI commands

mod check;
mod run;

pub use check::CheckCommand;
pub use run::RunCommand;

use bindcheck_core::ServerConfig;
use clap::{Parser, Subcommand};
use std::net::IpAddr;

/// bindcheck - service-binding database connectivity check
///
/// With no subcommand the HTTP server is started.
#[derive(Parser, Debug)]
#[command(name = "bindcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(
        short,
        long,
        env = "PORT",
        global = true,
        default_value_t = ServerConfig::DEFAULT_PORT
    )]
    pub port: u16,

    /// Address to listen on
    #[arg(long, env = "BINDCHECK_HOST", global = true, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// `VCAP_SERVICES` key holding the database binding
    #[arg(
        short,
        long,
        env = "BINDCHECK_SERVICE",
        global = true,
        default_value = ServerConfig::DEFAULT_SERVICE
    )]
    pub service: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default)
    Run(RunCommand),

    /// Probe the bound database once and print the result
    Check(CheckCommand),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run(RunCommand::default())
    }
}

impl Cli {
    /// Server configuration assembled from the arguments
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            service: self.service.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_without_subcommand() {
        let cli = Cli::try_parse_from(["bindcheck"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_run_with_port() {
        let cli = Cli::try_parse_from(["bindcheck", "run", "--port", "3000"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Run(_))));
        assert_eq!(cli.server_config().port, 3000);
    }

    #[test]
    fn test_cli_service_and_host() {
        let cli = Cli::try_parse_from([
            "bindcheck",
            "check",
            "-s",
            "p-mysql",
            "--host",
            "127.0.0.1",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Check(_))));
        let config = cli.server_config();
        assert_eq!(config.service, "p-mysql");
        assert_eq!(config.host.to_string(), "127.0.0.1");
    }

    #[test]
    fn test_cli_rejects_bad_port() {
        assert!(Cli::try_parse_from(["bindcheck", "--port", "http"]).is_err());
        assert!(Cli::try_parse_from(["bindcheck", "--port", "70000"]).is_err());
    }
}
