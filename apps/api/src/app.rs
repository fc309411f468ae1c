//! Application assembly: stores, schema and router

use std::time::Duration;

use axum::{
    http::{header, Method, Uri},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::graphql::{build_schema, BookshelfSchema};
use crate::repositories::{self, AuthorRepository, BookRepository, LibrarySeed};
use crate::routes::{graphql_router, health_router, GraphQLState, HealthState};

/// Everything the HTTP layer needs, built once at startup
#[derive(Clone)]
pub struct AppState {
    pub books: BookRepository,
    pub authors: AuthorRepository,
    pub schema: BookshelfSchema,
}

impl AppState {
    /// Seed fresh stores and build the schema over them
    pub fn from_seed(seed: LibrarySeed) -> ApiResult<Self> {
        let (books, authors) = repositories::from_seed(seed)?;
        let schema = build_schema(books.clone(), authors.clone());
        Ok(Self {
            books,
            authors,
            schema,
        })
    }

    /// Load the configured seed file, or fall back to the built-in library
    pub fn from_config(config: &Config) -> ApiResult<Self> {
        let seed = match &config.seed_file {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading seed file");
                LibrarySeed::from_path(path)?
            }
            None => LibrarySeed::builtin(),
        };
        Self::from_seed(seed)
    }
}

/// Build the CORS layer based on configuration.
///
/// - If `CORS_ORIGINS` is set, only those origins are allowed
/// - Otherwise production rejects cross-origin requests and development is permissive
pub fn build_cors_layer(config: &Config) -> CorsLayer {
    match &config.cors_allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let allowed_origins: Vec<_> = origins
                .iter()
                .filter_map(|origin| {
                    origin.parse().ok().or_else(|| {
                        tracing::warn!("Invalid CORS origin '{}', skipping", origin);
                        None
                    })
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::error!("No valid CORS origins configured, CORS requests will be rejected");
                CorsLayer::new()
            } else {
                tracing::info!(
                    "CORS configured with {} allowed origin(s): {:?}",
                    allowed_origins.len(),
                    origins
                );
                CorsLayer::new()
                    .allow_origin(allowed_origins)
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
                    .max_age(Duration::from_secs(3600))
            }
        }
        _ if config.is_production() => {
            tracing::warn!(
                "CORS_ORIGINS not configured in production mode. \
                 CORS requests will be rejected."
            );
            CorsLayer::new()
        }
        _ => {
            tracing::debug!("Using permissive CORS in development mode");
            CorsLayer::permissive()
        }
    }
}

/// Build the full router
pub fn build_router(config: &Config, state: AppState) -> Router {
    let graphql_state = GraphQLState::new(state.schema, config.graphiql);
    let health_state = HealthState::new(state.books, state.authors);

    Router::new()
        .route("/", get(root))
        .merge(graphql_router(graphql_state))
        // Health routes: /health, /health/live, /health/ready
        .merge(health_router(health_state))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
}

async fn root() -> &'static str {
    "Welcome to Bookshelf - query books and authors at /graphql"
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found("route", uri.path())
}
