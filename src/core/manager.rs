//! core::manager
//!
//! Facade over the library service and the displayer.
//!
//! # Design
//!
//! `LibraryManager` only forwards. It exists so the command loop talks to a
//! single collaborator instead of wiring the service and the displayer
//! itself; it deliberately adds no behavior of its own.

use super::book::Book;
use super::display::BookDisplayer;
use super::library::Library;
use super::repository::RemoveOutcome;

/// Facade composing a [`Library`] and a [`BookDisplayer`].
#[derive(Debug)]
pub struct LibraryManager {
    library: Library,
    displayer: BookDisplayer,
}

impl LibraryManager {
    /// Compose a manager from its two collaborators.
    pub fn new(library: Library, displayer: BookDisplayer) -> Self {
        Self { library, displayer }
    }

    /// Add a book; forwards to [`Library::add_book`].
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Book {
        self.library.add_book(title, author, year)
    }

    /// Remove a book by title; forwards to [`Library::remove_book`].
    pub fn remove_book(&mut self, title: &str) -> RemoveOutcome {
        self.library.remove_book(title)
    }

    /// Render the current book list; forwards to the displayer.
    pub fn show_books(&self) -> Vec<String> {
        self.displayer.render(&self.library.all_books())
    }
}
