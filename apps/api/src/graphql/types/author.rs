//! Author GraphQL type
//!
//! This module defines the GraphQL type for authors with the books relation.

use async_graphql::dataloader::DataLoader;
use async_graphql::{Context, Object, Result};

use crate::graphql::loaders::BooksByAuthorLoader;
use crate::models::Author as StoredAuthor;

use super::book::Book;

/// Author information exposed via GraphQL
pub struct Author {
    inner: StoredAuthor,
}

impl Author {
    /// Create a new GraphQL Author from a stored Author
    pub fn new(author: StoredAuthor) -> Self {
        Self { inner: author }
    }
}

impl From<StoredAuthor> for Author {
    fn from(author: StoredAuthor) -> Self {
        Self::new(author)
    }
}

/// This represents an author of a book
#[Object(name = "AuthorType")]
impl Author {
    async fn id(&self) -> i32 {
        self.inner.id
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }

    // Relationship resolvers

    /// Books by this author, in the order they were added
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        let loader = ctx.data::<DataLoader<BooksByAuthorLoader>>()?;
        let books = loader.load_one(self.inner.id).await?;

        Ok(books
            .unwrap_or_default()
            .into_iter()
            .map(Book::from)
            .collect())
    }
}
