//! core::book
//!
//! The book record type.
//!
//! # Design
//!
//! `Book` is a plain value type. All three fields are free text; the year is
//! deliberately not parsed as a number. The title acts as the de facto key
//! for removal, but uniqueness is never enforced, so two books with the same
//! title can coexist in a repository.

use serde::{Deserialize, Serialize};

/// A book record.
///
/// # Example
///
/// ```
/// use shelfling::core::book::Book;
///
/// let book = Book::new("Dune", "Frank Herbert", "1965");
/// assert_eq!(book.to_string(), "Title: Dune, Author: Frank Herbert, Year: 1965");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book title. Used for lookups; duplicates are allowed.
    pub title: String,
    /// Author, free text.
    pub author: String,
    /// Publication year, kept as text and never validated.
    pub year: String,
}

impl Book {
    /// Create a new book from its three text fields.
    ///
    /// Empty strings are accepted for any field.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Year: {}",
            self.title, self.author, self.year
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let book = Book::new("Dune", "Frank Herbert", "1965");
        assert_eq!(
            book.to_string(),
            "Title: Dune, Author: Frank Herbert, Year: 1965"
        );
    }

    #[test]
    fn empty_fields_accepted() {
        let book = Book::new("", "", "");
        assert_eq!(book.to_string(), "Title: , Author: , Year: ");
    }

    #[test]
    fn serde_roundtrip() {
        let book = Book::new("Dune", "Frank Herbert", "1965");
        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, parsed);
    }
}
