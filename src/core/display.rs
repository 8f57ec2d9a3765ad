//! core::display
//!
//! Rendering a book list to display lines.
//!
//! # Design
//!
//! The displayer returns rendered lines instead of writing to stdout or a
//! logger. The caller decides where the lines go, which keeps this module
//! free of any output mechanism and trivially testable. When the JSON format
//! is selected, each book renders as one machine-readable JSON object.

use serde_json::json;

use super::book::Book;

/// How a book list is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayFormat {
    /// One `Title: …, Author: …, Year: …` line per book.
    #[default]
    Text,
    /// One JSON object per book.
    Json,
}

/// Renders book lists to lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookDisplayer {
    format: DisplayFormat,
}

impl BookDisplayer {
    /// Create a displayer with the given format.
    pub fn new(format: DisplayFormat) -> Self {
        Self { format }
    }

    /// Render a book list to display lines, one entry per line.
    ///
    /// An empty list renders as exactly one "no books" line in either
    /// format.
    pub fn render(&self, books: &[Book]) -> Vec<String> {
        if books.is_empty() {
            return vec!["No books in the library.".to_string()];
        }

        books
            .iter()
            .map(|book| match self.format {
                DisplayFormat::Text => book.to_string(),
                DisplayFormat::Json => json!({
                    "title": book.title,
                    "author": book.author,
                    "year": book.year,
                })
                .to_string(),
            })
            .collect()
    }
}
