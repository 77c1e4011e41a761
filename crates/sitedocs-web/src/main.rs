//! Sitedocs
//!
//! Server for the project list and project documents screens.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;

use sitedocs_web::SiteDocsConfig;
use sitedocs_web::cli::{Cli, Command};
use sitedocs_web::config_handlers::handle_config_command;
use sitedocs_web::logging::init_logging;
use sitedocs_web::server::serve;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            let mut config =
                SiteDocsConfig::load(config_path).context("failed to load configuration")?;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            init_logging(&config.logging.level)?;
            serve(&config).await.context("server error")?;
        }
        Command::Config { action } => {
            handle_config_command(config_path, action)?;
        }
    }

    Ok(())
}
