//! HTTP route handlers for the Bookshelf API
//!
//! This module contains the HTTP endpoints:
//! - GraphQL execution and the GraphiQL explorer
//! - Health check and status endpoints

pub mod graphql;
pub mod health;

pub use graphql::{graphql_router, GraphQLState};
pub use health::{health_router, HealthState};
