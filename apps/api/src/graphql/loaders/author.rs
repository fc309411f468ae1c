//! Author DataLoader for batched fetching
//!
//! Batches the author lookups made by `BookType.author` across one request.

use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::convert::Infallible;

use crate::models::Author;
use crate::repositories::AuthorRepository;

/// DataLoader for batching author lookups by id
#[derive(Clone)]
pub struct AuthorLoader {
    repo: AuthorRepository,
}

impl AuthorLoader {
    pub fn new(repo: AuthorRepository) -> Self {
        Self { repo }
    }
}

impl Loader<i32> for AuthorLoader {
    type Value = Author;
    type Error = Infallible;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        Ok(self.repo.find_by_ids(keys).await)
    }
}
