//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize logging and load configuration
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, merges them with the
//! config file (flags win), and dispatches to a handler. Domain logic lives
//! in [`crate::core`] and [`crate::vehicles`]; handlers only wire components
//! together and present outcomes.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::ui::Verbosity;

/// Execution context shared by command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity derived from flags and config.
    pub verbosity: Verbosity,
    /// Loaded configuration.
    pub config: Config,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    // CLI flags take precedence over config-file defaults.
    let quiet = cli.quiet || config.quiet();
    init_tracing(quiet, cli.debug);

    let ctx = Context {
        verbosity: Verbosity::from_flags(quiet, cli.debug),
        config,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Initialize the global tracing subscriber.
///
/// Informational messages are log events with timestamp and level; the
/// level floor follows the quiet/debug flags. `SHELF_LOG` overrides both.
fn init_tracing(quiet: bool, debug: bool) {
    let default_level = if quiet {
        "warn"
    } else if debug {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_env("SHELF_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
