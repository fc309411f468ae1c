//! Health check HTTP route handlers
//!
//! Provides endpoints for checking the health of the API:
//! - `GET /health` - Simple liveness check (returns 200 OK)
//! - `GET /health/ready` - Readiness check (reports store sizes)
//! - `GET /health/live` - Kubernetes-style liveness probe

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::repositories::{AuthorRepository, BookRepository};

/// Shared application state for health check handlers
#[derive(Clone)]
pub struct HealthState {
    pub books: BookRepository,
    pub authors: AuthorRepository,
}

impl HealthState {
    /// Create new health state over the stores
    pub fn new(books: BookRepository, authors: AuthorRepository) -> Self {
        Self { books, authors }
    }
}

/// Body of the readiness probe
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub books: usize,
    pub authors: usize,
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(simple_health))
        .route("/health/live", get(liveness_probe))
        .route("/health/ready", get(readiness_probe))
        .with_state(state)
}

/// Simple health check - always returns OK if the server is running
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness probe for Kubernetes
///
/// Returns 200 if the server process is running and can handle requests.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness probe
///
/// The stores live in process memory, so the service is ready as soon as it
/// answers; the body reports how many records each store holds.
async fn readiness_probe(State(state): State<HealthState>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        status: "ready",
        version: env!("CARGO_PKG_VERSION"),
        books: state.books.count().await,
        authors: state.authors.count().await,
    })
}
