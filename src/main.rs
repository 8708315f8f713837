//! reclass CLI
//!
//! Usage: reclass <COMMAND>
//!
//! Commands:
//!   run     Process an invocation manifest
//!   clean   Delete all produced output

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Environment variable holding a full log filter directive
const LOG_ENV: &str = "RECLASS_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => commands::run::cmd_run(&args, cli.json, cli.verbose),
        Commands::Clean(args) => commands::clean::cmd_clean(&args, cli.json, cli.verbose),
    }
}

/// Initialise logging to stderr
///
/// `-v` flags win over the configured verbosity; `RECLASS_LOG` wins over both.
pub(crate) fn init_tracing(verbose: u8, configured: reclass::config::Verbosity) {
    let level = match verbose {
        0 => configured.log_level(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
