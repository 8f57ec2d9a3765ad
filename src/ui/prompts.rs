//! ui::prompts
//!
//! Line-oriented prompts over generic reader/writer pairs.
//!
//! # Design
//!
//! The prompter is generic over `BufRead`/`Write` so the command loop can
//! run against stdin/stdout in production and `Cursor` buffers in tests.
//! End of input is a typed outcome, not an error: piped input runs to
//! completion and then stops cleanly.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One prompt response: a line of input, or end of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptLine {
    /// A line was read; surrounding whitespace has been trimmed.
    Line(String),
    /// The input stream is exhausted.
    Eof,
}

/// Line prompter over a reader/writer pair.
#[derive(Debug)]
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Write a prompt and read one trimmed line.
    ///
    /// The prompt is written without a trailing newline and flushed so it
    /// appears before the read blocks. Empty responses are accepted.
    pub fn prompt(&mut self, message: &str) -> Result<PromptLine, PromptError> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;

        let mut line = String::new();
        let bytes = self.reader.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(PromptLine::Eof);
        }
        Ok(PromptLine::Line(line.trim().to_string()))
    }
}
