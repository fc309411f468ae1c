//! GraphQL queries for Bookshelf
//!
//! This module contains all query resolvers, organized by domain.

mod author;
mod book;

pub use author::AuthorQuery;
pub use book::BookQuery;

use async_graphql::MergedObject;

/// Root Query
#[derive(MergedObject, Default)]
pub struct Query(BookQuery, AuthorQuery);
