//! DataLoader implementations for GraphQL
//!
//! The book/author relations are resolved per parent object. When a query
//! lists many books with their authors (or many authors with their books),
//! these loaders collect the keys of one request and resolve them with a
//! single pass over the store.
//!
//! There are two types of loaders:
//! - Single-entity loaders: Return `Option<T>` for a single entity by ID
//! - Collection loaders: Return `Vec<T>` for related entities by parent ID

mod author;
mod books_by_author;

pub use author::AuthorLoader;
pub use books_by_author::BooksByAuthorLoader;
