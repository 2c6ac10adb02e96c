//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::logging::{init_logging, Verbosity};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_logging(Verbosity::from_flags(cli.quiet, cli.verbose));
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
        Command::Config { config } => {
            let config = resolve_config(config.as_deref(), None, None)?;
            print_config(&config, &mut io::stdout())
        }
    }
}

/// Load the config file (or defaults) and apply CLI overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    tracing::info!(addr = %config.socket_addr(), "starting WhoIsVoting API");

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Write the effective configuration as pretty JSON
pub fn print_config<W: Write>(config: &HttpServerConfig, out: &mut W) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)?;
    Ok(())
}
