//! Author repository for in-memory author storage

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::table::{Record, Table};
use crate::error::ApiResult;
use crate::models::{Author, CreateAuthor};

impl Record for Author {
    const RESOURCE: &'static str = "author";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Repository for author store operations
#[derive(Clone, Default)]
pub struct AuthorRepository {
    table: Arc<RwLock<Table<Author>>>,
}

impl AuthorRepository {
    /// Create an empty AuthorRepository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an AuthorRepository pre-populated with the given authors
    pub fn with_authors(authors: Vec<Author>) -> ApiResult<Self> {
        Ok(Self {
            table: Arc::new(RwLock::new(Table::seeded(authors)?)),
        })
    }

    /// Find the first author with the given id
    pub async fn find_by_id(&self, author_id: i32) -> Option<Author> {
        self.table.read().await.get(author_id).cloned()
    }

    /// Find the authors for a batch of ids; unknown ids are left out
    pub async fn find_by_ids(&self, author_ids: &[i32]) -> HashMap<i32, Author> {
        let table = self.table.read().await;
        author_ids
            .iter()
            .filter_map(|id| table.get(*id).map(|author| (*id, author.clone())))
            .collect()
    }

    /// All authors in insertion order
    pub async fn find_all(&self) -> Vec<Author> {
        self.table.read().await.rows().to_vec()
    }

    /// Append a new author and return it with its assigned id
    pub async fn create(&self, input: CreateAuthor) -> ApiResult<Author> {
        let mut table = self.table.write().await;
        table.insert_with(|id| Author {
            id,
            name: input.name,
        })
    }

    /// Get total count of authors
    pub async fn count(&self) -> usize {
        self.table.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn repo() -> AuthorRepository {
        AuthorRepository::with_authors(vec![
            Author {
                id: 1,
                name: "J.K.Rowling".to_string(),
            },
            Author {
                id: 2,
                name: "J.R.R.Tolkien".to_string(),
            },
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = repo();
        assert_eq!(repo.find_by_id(1).await.unwrap().name, "J.K.Rowling");
        assert!(repo.find_by_id(999).await.is_none());
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_unknown() {
        let found = repo().find_by_ids(&[2, 7]).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[&2].name, "J.R.R.Tolkien");
    }

    #[tokio::test]
    async fn test_create_author() {
        let repo = repo();
        let created = repo.create(CreateAuthor::new("New Author")).await.unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(created.name, "New Author");
        assert_eq!(repo.count().await, 3);
        assert_eq!(repo.find_by_id(3).await, Some(created));
    }

    #[tokio::test]
    async fn test_create_fails_once_ids_run_out() {
        let repo = AuthorRepository::with_authors(vec![Author {
            id: i32::MAX - 1,
            name: "Last".to_string(),
        }])
        .unwrap();

        let result = repo.create(CreateAuthor::new("One Too Many")).await;

        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert_eq!(repo.count().await, 1);
    }
}
