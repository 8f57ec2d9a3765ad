//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file instead of the default
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::vehicles::RegionSpec;

/// Shelfling - an in-memory book library CLI with a vehicle-factory demo
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use this config file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the interactive library manager (add, remove, show, exit)
    Library {
        /// Render `show` output as JSON objects, one per book
        #[arg(long)]
        json: bool,
    },

    /// Run the vehicle-factory demo
    Vehicles {
        /// Build vehicles for one region only (default: both)
        #[arg(long, value_enum)]
        region: Option<RegionArg>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Region selection for the vehicles demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegionArg {
    /// US-specification vehicles
    Us,
    /// EU-specification vehicles
    Eu,
}

impl From<RegionArg> for RegionSpec {
    fn from(arg: RegionArg) -> Self {
        match arg {
            RegionArg::Us => RegionSpec::Us,
            RegionArg::Eu => RegionSpec::Eu,
        }
    }
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash
    Bash,
    /// Zsh
    Zsh,
    /// Fish
    Fish,
    /// PowerShell
    PowerShell,
}
