//! Author mutations for Bookshelf GraphQL API
//!
//! - addAuthor: Append a new author to the author store

use async_graphql::{Context, Object, Result};

use crate::graphql::types::Author;
use crate::models::CreateAuthor;
use crate::repositories::AuthorRepository;

/// Author-related mutations
#[derive(Default)]
pub struct AuthorMutation;

#[Object]
impl AuthorMutation {
    /// Add author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        let repo = ctx.data::<AuthorRepository>()?;
        let author = repo.create(CreateAuthor::new(name)).await?;

        tracing::info!(author_id = author.id, "Author added");

        Ok(Author::from(author))
    }
}
