//! Command-line arguments for the `sitedocs` binary.

use clap::{Parser, Subcommand};

/// Sitedocs - construction project and document workspace
#[derive(Parser, Debug)]
#[command(name = "sitedocs", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands. Running without one starts the server.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the web server
    Serve {
        /// Interface to bind, overriding server.host
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding server.port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write it (defaults to the resolved path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration as environment variables
    Export {
        /// Emit `KEY=value` lines without `export`, for docker --env-file
        #[arg(long)]
        docker_env: bool,
    },
}
