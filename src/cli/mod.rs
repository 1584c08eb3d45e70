//! CLI module for Better Health
//!
//! Command-line parsing for the `better-health-server` binary. Uses clap for
//! argument parsing and owo-colors for colored terminal output.

pub mod output;

use crate::utils::Config;
use clap::{Parser, Subcommand};

/// Better Health AI - healthcare chat assistant server
#[derive(Parser, Debug)]
#[command(
    name = "better-health-server",
    version,
    about = "Better Health AI - healthcare chat assistant server",
    long_about = "Relays chat messages from the Better Health UI to a hosted model,\n\
                  with a keyword mock for offline use.\n\n\
                  Configuration comes from the environment (and .env); flags override it.",
    after_help = "EXAMPLES:\n    \
                  better-health-server                  # Start the server\n    \
                  better-health-server --port 9000      # Start on another port\n    \
                  better-health-server config           # Show the resolved configuration\n    \
                  better-health-server probe            # Check the hosted model once"
)]
pub struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print the resolved configuration with the API key redacted
    Config,

    /// Run the model health check once and exit
    Probe,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }

    /// Apply flag overrides on top of the environment configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.verbose {
            config.server.log_level = "debug".to_string();
        }
    }
}
