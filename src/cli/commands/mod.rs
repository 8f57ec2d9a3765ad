//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Resolves its defaults from flags and config
//! 2. Wires the domain components it needs
//! 3. Presents outcomes (log events and plain output)
//!
//! Handlers contain no domain logic of their own.

mod completion;
mod library;
mod vehicles;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use library::{library, run_loop};
pub use vehicles::vehicles;

use anyhow::Result;

use super::args::Command;
use super::Context;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Library { json } => library(ctx, json),
        Command::Vehicles { region } => vehicles(ctx, region.map(Into::into)),
        Command::Completion { shell } => completion(shell),
    }
}
