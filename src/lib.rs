//! Personal book catalog kept in local JSON files.
//!
//! [`catalog::CatalogStore`] owns one library file: the book records, the
//! author and year indexes, and the id counter. It rewrites the whole file
//! after every change. The [`cli`] module is the interactive shell and the
//! scripting subcommands built on top of it.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;

pub use error::{BookshelfError, Result};
