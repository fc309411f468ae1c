//! Books-by-Author DataLoader for batched fetching
//!
//! Batches the reverse join made by `AuthorType.books`: one scan of the book
//! store serves every author requested in the same request.

use async_graphql::dataloader::Loader;
use std::collections::HashMap;
use std::convert::Infallible;

use crate::models::Book;
use crate::repositories::BookRepository;

/// DataLoader for batching books-by-author queries
#[derive(Clone)]
pub struct BooksByAuthorLoader {
    repo: BookRepository,
}

impl BooksByAuthorLoader {
    pub fn new(repo: BookRepository) -> Self {
        Self { repo }
    }
}

impl Loader<i32> for BooksByAuthorLoader {
    type Value = Vec<Book>;
    type Error = Infallible;

    async fn load(&self, keys: &[i32]) -> Result<HashMap<i32, Self::Value>, Self::Error> {
        // Guard against empty keys
        if keys.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(self.repo.find_by_authors(keys).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateBook;

    #[tokio::test]
    async fn test_load_groups_books_by_author() {
        let repo = BookRepository::new();
        repo.create(CreateBook::new("A", 1)).await.unwrap();
        repo.create(CreateBook::new("B", 2)).await.unwrap();
        repo.create(CreateBook::new("C", 1)).await.unwrap();

        let loaded = BooksByAuthorLoader::new(repo).load(&[1, 3]).await.unwrap();

        let names: Vec<_> = loaded[&1].iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert!(loaded[&3].is_empty());
    }
}
