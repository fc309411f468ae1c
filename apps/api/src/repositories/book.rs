//! Book repository for in-memory book storage
//!
//! This module provides all book-related store operations in a single location,
//! following the repository pattern.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::table::{Record, Table};
use crate::error::ApiResult;
use crate::models::{Book, CreateBook};

impl Record for Book {
    const RESOURCE: &'static str = "book";

    fn id(&self) -> i32 {
        self.id
    }
}

/// Repository for book store operations
#[derive(Clone, Default)]
pub struct BookRepository {
    table: Arc<RwLock<Table<Book>>>,
}

impl BookRepository {
    /// Create an empty BookRepository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a BookRepository pre-populated with the given books
    pub fn with_books(books: Vec<Book>) -> ApiResult<Self> {
        Ok(Self {
            table: Arc::new(RwLock::new(Table::seeded(books)?)),
        })
    }

    /// Find the first book with the given id
    pub async fn find_by_id(&self, book_id: i32) -> Option<Book> {
        self.table.read().await.get(book_id).cloned()
    }

    /// All books in insertion order
    pub async fn find_all(&self) -> Vec<Book> {
        self.table.read().await.rows().to_vec()
    }

    /// Books written by the given author, in insertion order
    pub async fn find_by_author(&self, author_id: i32) -> Vec<Book> {
        self.table
            .read()
            .await
            .rows()
            .iter()
            .filter(|book| book.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Books grouped by author for a batch of author ids
    ///
    /// Every requested id gets an entry, empty when the author has no books.
    /// Within each group books keep insertion order.
    pub async fn find_by_authors(&self, author_ids: &[i32]) -> HashMap<i32, Vec<Book>> {
        let mut result: HashMap<i32, Vec<Book>> =
            author_ids.iter().map(|id| (*id, Vec::new())).collect();

        let table = self.table.read().await;
        for book in table.rows() {
            if let Some(group) = result.get_mut(&book.author_id) {
                group.push(book.clone());
            }
        }

        result
    }

    /// Append a new book and return it with its assigned id
    ///
    /// Fails with a validation error once the book id space is exhausted.
    ///
    /// The author id is stored as given; it is not checked against the
    /// author store.
    pub async fn create(&self, input: CreateBook) -> ApiResult<Book> {
        let mut table = self.table.write().await;
        table.insert_with(|id| Book {
            id,
            name: input.name,
            author_id: input.author_id,
        })
    }

    /// Get total count of books
    pub async fn count(&self) -> usize {
        self.table.read().await.len()
    }
}
