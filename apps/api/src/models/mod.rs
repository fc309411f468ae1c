//! Domain models for Bookshelf
//!
//! This module contains the plain records held by the in-memory stores:
//! - Books, each referencing an author by id
//! - Authors

pub mod author;
pub mod book;

pub use author::{Author, CreateAuthor};
pub use book::{Book, CreateBook};
