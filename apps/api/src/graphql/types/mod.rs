//! GraphQL type definitions for Bookshelf
//!
//! This module contains the GraphQL object types that are exposed
//! through the API.

mod author;
mod book;

pub use author::Author;
pub use book::Book;
