//! GraphQL schema and resolvers for Bookshelf
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for single and listed books and authors
//! - Mutation resolvers for adding books and authors
//! - Object types with their relation resolvers
//! - DataLoaders batching the book/author joins

pub mod loaders;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use schema::{build_schema, BookshelfSchema, SchemaBuilder};
