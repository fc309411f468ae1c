//! GraphQL mutations for Bookshelf
//!
//! This module contains all mutation resolvers, organized by domain.

mod author;
mod book;

pub use author::AuthorMutation;
pub use book::BookMutation;

use async_graphql::MergedObject;

/// Root Mutation
#[derive(MergedObject, Default)]
pub struct Mutation(BookMutation, AuthorMutation);
