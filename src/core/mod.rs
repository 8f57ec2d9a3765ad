//! core
//!
//! Library-domain types and services.
//!
//! # Layering
//!
//! Dependencies point inward: [`book`] has none, [`repository`] depends on
//! the book type, [`library`] depends on the repository trait, [`manager`]
//! composes the library with the [`display`] renderer. Nothing in this
//! module performs I/O; operations return values and rendered lines, and
//! the `cli` layer decides how to present them.

pub mod book;
pub mod display;
pub mod library;
pub mod manager;
pub mod repository;
