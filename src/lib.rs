//! Shelfling - an in-memory book library CLI with a vehicle-factory demo
//!
//! Shelfling is a single-binary tool with two independent demo programs:
//! an interactive library manager backed by an in-memory book repository,
//! and an abstract-factory demo that builds regional vehicle variants.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Library domain: book, repository, service, displayer, facade
//! - [`vehicles`] - Vehicle domain: vehicle types and regional factories
//! - [`config`] - Optional TOML configuration
//! - [`ui`] - Output helpers and line-oriented prompts
//!
//! # Design rules
//!
//! 1. Domain operations return structured outcomes; only the CLI layer
//!    logs or prints
//! 2. Storage is reached only through the `BookRepository` trait
//! 3. Repository snapshots are owned copies; callers can never mutate the
//!    backing store through them

pub mod cli;
pub mod config;
pub mod core;
pub mod ui;
pub mod vehicles;
