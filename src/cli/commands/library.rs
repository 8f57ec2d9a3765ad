//! library command - interactive library manager
//!
//! # Command loop
//!
//! Waits for one of `add`, `remove`, `show`, `exit` (trimmed, lowercased).
//! `add` collects title, author, and year through three separate prompts;
//! `remove` collects one title; anything else logs an invalid-command
//! message and re-prompts. The loop ends on `exit` or end of input, both
//! with a clean success exit code.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::core::display::{BookDisplayer, DisplayFormat};
use crate::core::library::Library;
use crate::core::manager::LibraryManager;
use crate::core::repository::{InMemoryBookRepository, RemoveOutcome};
use crate::ui::prompts::{PromptError, PromptLine, Prompter};
use crate::ui::Verbosity;

use super::Context;

/// Run the interactive library manager against stdin/stdout.
pub fn library(ctx: &Context, json: bool) -> Result<()> {
    let format = if json || ctx.config.library_json() {
        DisplayFormat::Json
    } else {
        DisplayFormat::Text
    };

    let library = Library::new(Box::new(InMemoryBookRepository::new()));
    let mut manager = LibraryManager::new(library, BookDisplayer::new(format));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    // Quiet mode drops the prompt text, which keeps piped/scripted runs
    // free of interleaved prompts.
    if ctx.verbosity == Verbosity::Quiet {
        let mut prompter = Prompter::new(stdin.lock(), std::io::sink());
        run_loop(&mut manager, &mut prompter)?;
    } else {
        let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
        run_loop(&mut manager, &mut prompter)?;
    }
    Ok(())
}

/// The command loop, separated from the stdin/stdout wiring so tests can
/// drive it with in-memory buffers.
pub fn run_loop<R: BufRead, W: Write>(
    manager: &mut LibraryManager,
    prompter: &mut Prompter<R, W>,
) -> Result<(), PromptError> {
    loop {
        let command = match prompter.prompt("Enter command (add, remove, show, exit): ")? {
            PromptLine::Line(line) => line.to_lowercase(),
            PromptLine::Eof => {
                info!("Exiting program...");
                return Ok(());
            }
        };

        match command.as_str() {
            "add" => {
                let Some(title) = read_field(prompter, "Enter book title: ")? else {
                    continue;
                };
                let Some(author) = read_field(prompter, "Enter book author: ")? else {
                    continue;
                };
                let Some(year) = read_field(prompter, "Enter book year: ")? else {
                    continue;
                };

                let book = manager.add_book(title, author, year);
                info!("Book added: {}", book);
            }
            "remove" => {
                let Some(title) = read_field(prompter, "Enter book title to remove: ")? else {
                    continue;
                };

                match manager.remove_book(&title) {
                    RemoveOutcome::Removed => info!("Book removed: {}", title),
                    RemoveOutcome::NotFound => info!("Book not found: {}", title),
                }
            }
            "show" => {
                for line in manager.show_books() {
                    info!("{}", line);
                }
            }
            "exit" => {
                info!("Exiting program...");
                return Ok(());
            }
            _ => {
                info!("Invalid command. Please try again.");
            }
        }
    }
}

/// Read one field, mapping end of input to `None` so the loop can wind down
/// on the next command prompt.
fn read_field<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    message: &str,
) -> Result<Option<String>, PromptError> {
    match prompter.prompt(message)? {
        PromptLine::Line(line) => Ok(Some(line)),
        PromptLine::Eof => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn manager() -> LibraryManager {
        LibraryManager::new(
            Library::new(Box::new(InMemoryBookRepository::new())),
            BookDisplayer::default(),
        )
    }

    fn run(script: &str, manager: &mut LibraryManager) {
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        run_loop(manager, &mut prompter).unwrap();
    }

    #[test]
    fn add_then_exit_stores_the_book() {
        let mut mgr = manager();
        run("add\nDune\nFrank Herbert\n1965\nexit\n", &mut mgr);
        assert_eq!(
            mgr.show_books(),
            ["Title: Dune, Author: Frank Herbert, Year: 1965"]
        );
    }

    #[test]
    fn remove_absent_title_leaves_store_unchanged() {
        let mut mgr = manager();
        run("remove\nDune\nexit\n", &mut mgr);
        assert_eq!(mgr.show_books(), ["No books in the library."]);
    }

    #[test]
    fn commands_are_lowercased() {
        let mut mgr = manager();
        run("ADD\nDune\nHerbert\n1965\nexit\n", &mut mgr);
        assert_eq!(mgr.show_books(), ["Title: Dune, Author: Herbert, Year: 1965"]);
    }

    #[test]
    fn invalid_command_keeps_looping() {
        let mut mgr = manager();
        run("nonsense\nadd\nDune\nHerbert\n1965\nexit\n", &mut mgr);
        assert_eq!(mgr.show_books(), ["Title: Dune, Author: Herbert, Year: 1965"]);
    }

    #[test]
    fn eof_terminates_the_loop() {
        let mut mgr = manager();
        run("add\nDune\nHerbert\n1965\n", &mut mgr);
        assert_eq!(mgr.show_books(), ["Title: Dune, Author: Herbert, Year: 1965"]);
    }

    #[test]
    fn eof_mid_add_discards_partial_book() {
        let mut mgr = manager();
        run("add\nDune\n", &mut mgr);
        assert_eq!(mgr.show_books(), ["No books in the library."]);
    }

    #[test]
    fn empty_fields_accepted() {
        let mut mgr = manager();
        run("add\n\n\n\nexit\n", &mut mgr);
        assert_eq!(mgr.show_books(), ["Title: , Author: , Year: "]);
    }

    #[test]
    fn duplicate_titles_first_match_removed() {
        let mut mgr = manager();
        run(
            "add\nDune\nHerbert\n1965\nadd\nDune\nX\n1970\nremove\nDune\nexit\n",
            &mut mgr,
        );
        assert_eq!(mgr.show_books(), ["Title: Dune, Author: X, Year: 1970"]);
    }
}
