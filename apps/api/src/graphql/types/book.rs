//! Book GraphQL type
//!
//! This module defines the GraphQL type for books with the author relation.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};

use crate::graphql::loaders::AuthorLoader;
use crate::models::Book as StoredBook;

use super::author::Author;

/// Book information exposed via GraphQL
pub struct Book {
    inner: StoredBook,
}

impl Book {
    /// Create a new GraphQL Book from a stored Book
    pub fn new(book: StoredBook) -> Self {
        Self { inner: book }
    }
}

impl From<StoredBook> for Book {
    fn from(book: StoredBook) -> Self {
        Self::new(book)
    }
}

/// This represents a book written by an author
#[Object(name = "BookType")]
impl Book {
    async fn id(&self) -> i32 {
        self.inner.id
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    async fn author_id(&self) -> i32 {
        self.inner.author_id
    }

    /// The author of this book, or null when the author id is unknown
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let loader = ctx.data::<DataLoader<AuthorLoader>>()?;
        let author = loader.load_one(self.inner.author_id).await?;
        Ok(author.map(Author::from))
    }
}
