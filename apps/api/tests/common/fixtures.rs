//! Test fixtures for API integration tests
//!
//! Provides reusable seed data and store builders.

#![allow(dead_code)]

use bookshelf_api::models::{Author, Book};
use bookshelf_api::repositories::LibrarySeed;
use bookshelf_api::AppState;

pub fn author(id: i32, name: &str) -> Author {
    Author {
        id,
        name: name.to_string(),
    }
}

pub fn book(id: i32, name: &str, author_id: i32) -> Book {
    Book {
        id,
        name: name.to_string(),
        author_id,
    }
}

/// Seed builder for tests that need a specific store layout
#[derive(Debug, Default)]
pub struct SeedBuilder {
    seed: LibrarySeed,
}

impl SeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author(mut self, id: i32, name: &str) -> Self {
        self.seed.authors.push(author(id, name));
        self
    }

    pub fn book(mut self, id: i32, name: &str, author_id: i32) -> Self {
        self.seed.books.push(book(id, name, author_id));
        self
    }

    pub fn build(self) -> LibrarySeed {
        self.seed
    }
}

/// Fresh application state over the built-in library
pub fn builtin_state() -> AppState {
    AppState::from_seed(LibrarySeed::builtin()).expect("built-in seed is valid")
}

/// Fresh application state over a custom seed
pub fn state_with(seed: LibrarySeed) -> AppState {
    AppState::from_seed(seed).expect("test seed is valid")
}
