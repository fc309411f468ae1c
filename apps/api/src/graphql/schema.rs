//! GraphQL schema builder for Bookshelf
//!
//! This module provides the schema construction for the async-graphql API.

use async_graphql::dataloader::DataLoader;
use async_graphql::{EmptySubscription, Schema};

use crate::repositories::{AuthorRepository, BookRepository};

use super::loaders::{AuthorLoader, BooksByAuthorLoader};
use super::mutation::Mutation;
use super::query::Query;

/// The Bookshelf GraphQL schema type
pub type BookshelfSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builder for constructing the GraphQL schema with its stores
pub struct SchemaBuilder {
    books: Option<BookRepository>,
    authors: Option<AuthorRepository>,
}

impl SchemaBuilder {
    /// Create a new schema builder
    pub fn new() -> Self {
        Self {
            books: None,
            authors: None,
        }
    }

    /// Set the book store
    pub fn books(mut self, books: BookRepository) -> Self {
        self.books = Some(books);
        self
    }

    /// Set the author store
    pub fn authors(mut self, authors: AuthorRepository) -> Self {
        self.authors = Some(authors);
        self
    }

    /// Build the schema with all configured stores
    ///
    /// A store that was not set starts out empty.
    pub fn build(self) -> BookshelfSchema {
        let books = self.books.unwrap_or_default();
        let authors = self.authors.unwrap_or_default();

        let author_loader = DataLoader::new(AuthorLoader::new(authors.clone()), tokio::spawn);
        let books_loader =
            DataLoader::new(BooksByAuthorLoader::new(books.clone()), tokio::spawn);

        Schema::build(Query::default(), Mutation::default(), EmptySubscription)
            .data(books)
            .data(authors)
            .data(author_loader)
            .data(books_loader)
            .finish()
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a new GraphQL schema over the given stores
pub fn build_schema(books: BookRepository, authors: AuthorRepository) -> BookshelfSchema {
    SchemaBuilder::new().books(books).authors(authors).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_builder_default() {
        let builder = SchemaBuilder::default();
        assert!(builder.books.is_none());
        assert!(builder.authors.is_none());
    }

    #[test]
    fn test_sdl_exposes_type_and_field_names() {
        let sdl = SchemaBuilder::new().build().sdl();

        assert!(sdl.contains("type BookType"));
        assert!(sdl.contains("type AuthorType"));
        assert!(sdl.contains("book(id: Int): BookType"));
        assert!(sdl.contains("addBook(name: String!, authorId: Int!): BookType!"));
        assert!(sdl.contains("addAuthor(name: String!): AuthorType!"));
        assert!(!sdl.contains("Subscription"));
    }
}
