//! core::repository
//!
//! Book storage abstraction and the in-memory implementation.
//!
//! # Design
//!
//! `BookRepository` is the seam between the library service and storage.
//! The only implementation here keeps books in an ordered `Vec`; removal is
//! a linear scan. Callers never see the live backing store: `all()` returns
//! a cloned snapshot, so mutating the returned vector cannot corrupt the
//! repository.
//!
//! # Removal policy
//!
//! Titles are matched by exact, case-sensitive string equality. When several
//! books share a title, `remove` deletes only the earliest-inserted match;
//! the relative order of the remaining entries is preserved.

use super::book::Book;

/// Result of a removal attempt.
///
/// Removal of an absent title is not an error, just an outcome the caller
/// may want to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// A book with the given title was found and removed.
    Removed,
    /// No book with the given title exists.
    NotFound,
}

/// Storage abstraction for books.
pub trait BookRepository {
    /// Append a book to the end of the sequence. Always succeeds.
    fn add(&mut self, book: Book);

    /// Remove the first book whose title equals `title` exactly.
    ///
    /// Scans from the start of the sequence; with duplicate titles only the
    /// earliest-inserted match is removed.
    fn remove(&mut self, title: &str) -> RemoveOutcome;

    /// Snapshot of all books in insertion order.
    ///
    /// The returned vector is owned by the caller; mutating it does not
    /// affect the repository.
    fn all(&self) -> Vec<Book>;
}

/// In-memory book repository backed by an ordered `Vec`.
///
/// # Example
///
/// ```
/// use shelfling::core::book::Book;
/// use shelfling::core::repository::{BookRepository, InMemoryBookRepository, RemoveOutcome};
///
/// let mut repo = InMemoryBookRepository::new();
/// repo.add(Book::new("Dune", "Frank Herbert", "1965"));
/// assert_eq!(repo.remove("Dune"), RemoveOutcome::Removed);
/// assert_eq!(repo.remove("Dune"), RemoveOutcome::NotFound);
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the repository holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn add(&mut self, book: Book) {
        self.books.push(book);
    }

    fn remove(&mut self, title: &str) -> RemoveOutcome {
        match self.books.iter().position(|book| book.title == title) {
            Some(index) => {
                self.books.remove(index);
                RemoveOutcome::Removed
            }
            None => RemoveOutcome::NotFound,
        }
    }

    fn all(&self) -> Vec<Book> {
        self.books.clone()
    }
}
