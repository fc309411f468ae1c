//! In-memory repository layer for Bookshelf
//!
//! Each repository is a cheap, clonable handle over an explicitly owned
//! table. The handles are injected into the GraphQL schema as context data,
//! so resolvers never reach for process-wide state and tests can build a
//! fresh store per case.

pub mod author;
pub mod book;
pub mod seed;
mod table;

pub use author::AuthorRepository;
pub use book::BookRepository;
pub use seed::LibrarySeed;
pub use table::Record;

use crate::error::ApiResult;

/// Build both repositories from a seed document
pub fn from_seed(seed: LibrarySeed) -> ApiResult<(BookRepository, AuthorRepository)> {
    let (book_count, author_count) = (seed.books.len(), seed.authors.len());
    let authors = AuthorRepository::with_authors(seed.authors)?;
    let books = BookRepository::with_books(seed.books)?;

    tracing::debug!(
        books = book_count,
        authors = author_count,
        "Repositories seeded"
    );

    Ok((books, authors))
}
