//! Book mutations for Bookshelf GraphQL API
//!
//! - addBook: Append a new book to the book store

use async_graphql::{Context, Object, Result};

use crate::graphql::types::Book;
use crate::models::CreateBook;
use crate::repositories::BookRepository;

/// Book-related mutations
#[derive(Default)]
pub struct BookMutation;

#[Object]
impl BookMutation {
    /// Add book
    ///
    /// The author id is stored as given; a book may reference an author
    /// that does not exist, in which case its `author` resolves to null.
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Result<Book> {
        let repo = ctx.data::<BookRepository>()?;
        let book = repo.create(CreateBook::new(name, author_id)).await?;

        tracing::info!(book_id = book.id, author_id = book.author_id, "Book added");

        Ok(Book::from(book))
    }
}
