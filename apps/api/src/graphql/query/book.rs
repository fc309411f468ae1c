//! Book queries for Bookshelf GraphQL API
//!
//! - book: Look up a single book by id
//! - books: List every book in insertion order

use async_graphql::{Context, Object, Result};

use crate::graphql::types::Book;
use crate::repositories::BookRepository;

/// Book-related queries
#[derive(Default)]
pub struct BookQuery;

#[Object]
impl BookQuery {
    /// A single book
    ///
    /// Resolves to null when no book has the id, or when no id is given.
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let repo = ctx.data::<BookRepository>()?;
        Ok(repo.find_by_id(id).await.map(Book::from))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let repo = ctx.data::<BookRepository>()?;
        Ok(repo.find_all().await.into_iter().map(Book::from).collect())
    }
}
