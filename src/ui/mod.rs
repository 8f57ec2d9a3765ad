//! ui
//!
//! User interaction utilities.
//!
//! # Responsibilities
//!
//! - Output formatting that respects the quiet flag
//! - Line-oriented prompts, generic over reader/writer for testability

pub mod output;
pub mod prompts;

pub use output::Verbosity;
pub use prompts::{PromptError, PromptLine, Prompter};
