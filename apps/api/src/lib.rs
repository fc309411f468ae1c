//! Bookshelf API library
//!
//! A GraphQL API over two in-memory collections, books and authors.
//! This module exposes the core API components for use in integration tests
//! and by the server binary.

pub mod app;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod repositories;
pub mod routes;

// Re-export commonly used types
pub use app::{build_router, AppState};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use graphql::{build_schema, BookshelfSchema};
