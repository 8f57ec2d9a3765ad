//! core::library
//!
//! The library service on top of a [`BookRepository`].
//!
//! # Design
//!
//! `Library` depends on the repository trait, not a concrete store, so the
//! storage strategy can change without touching the service. Operations
//! return structured outcomes (`Book`, [`RemoveOutcome`]) rather than
//! printing anything; presentation belongs to the caller.

use super::book::Book;
use super::repository::{BookRepository, RemoveOutcome};

/// Library service over an injected repository.
///
/// # Example
///
/// ```
/// use shelfling::core::library::Library;
/// use shelfling::core::repository::InMemoryBookRepository;
///
/// let mut library = Library::new(Box::new(InMemoryBookRepository::new()));
/// let added = library.add_book("Dune", "Frank Herbert", "1965");
/// assert_eq!(added.title, "Dune");
/// assert_eq!(library.all_books().len(), 1);
/// ```
pub struct Library {
    repository: Box<dyn BookRepository>,
}

impl Library {
    /// Create a library backed by the given repository.
    pub fn new(repository: Box<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Construct a book from three text fields and store it.
    ///
    /// Returns the book that was added so the caller can report it.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Book {
        let book = Book::new(title, author, year);
        self.repository.add(book.clone());
        book
    }

    /// Remove the first book with the given title, if any.
    pub fn remove_book(&mut self, title: &str) -> RemoveOutcome {
        self.repository.remove(title)
    }

    /// Snapshot of all stored books in insertion order.
    pub fn all_books(&self) -> Vec<Book> {
        self.repository.all()
    }
}

impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("books", &self.repository.all().len())
            .finish()
    }
}
