//! CLI argument definitions using clap
//!
//! Commands:
//! - whoisvoting serve [--config <path>] [--host <host>] [--port <port>]
//! - whoisvoting config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// WhoIsVoting - voter registration records API
#[derive(Parser, Debug)]
#[command(name = "whoisvoting")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overriding the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overriding the config file
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the effective configuration as JSON
    Config {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["whoisvoting", "-v", "serve", "--port", "8080"]).unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Serve { config, host, port } => {
                assert!(config.is_none());
                assert!(host.is_none());
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_command() {
        let cli =
            Cli::try_parse_from(["whoisvoting", "config", "--config", "./voting.json"]).unwrap();
        assert!(matches!(cli.command, Command::Config { config: Some(_) }));
    }
}
