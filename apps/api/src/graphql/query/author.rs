//! Author queries for Bookshelf GraphQL API
//!
//! - author: Look up a single author by id
//! - authors: List every author in insertion order

use async_graphql::{Context, Object, Result};

use crate::graphql::types::Author;
use crate::repositories::AuthorRepository;

/// Author-related queries
#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    /// A single author
    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        let Some(id) = id else {
            return Ok(None);
        };

        let repo = ctx.data::<AuthorRepository>()?;
        Ok(repo.find_by_id(id).await.map(Author::from))
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let repo = ctx.data::<AuthorRepository>()?;
        Ok(repo.find_all().await.into_iter().map(Author::from).collect())
    }
}
