//! Common test utilities for API integration tests
//!
//! This module provides shared test infrastructure for integration tests,
//! including seed fixtures and helpers for running GraphQL requests.

#![allow(unused_imports)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
