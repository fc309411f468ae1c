//! GraphQL HTTP route handlers
//!
//! Everything is served from a single path:
//! - `POST /graphql` - execute a GraphQL request
//! - `GET /graphql` - GraphiQL explorer for browsers, otherwise execute the
//!   query carried in the query string (queries only)

use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql_axum::{rejection::GraphQLRejection, GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::graphql::BookshelfSchema;

/// Path the GraphQL endpoint and explorer are mounted on
pub const GRAPHQL_PATH: &str = "/graphql";

/// Shared state for the GraphQL handlers
#[derive(Clone)]
pub struct GraphQLState {
    pub schema: BookshelfSchema,
    /// Serve GraphiQL to browsers on GET
    pub graphiql: bool,
}

impl GraphQLState {
    pub fn new(schema: BookshelfSchema, graphiql: bool) -> Self {
        Self { schema, graphiql }
    }
}

/// Create the GraphQL router
pub fn graphql_router(state: GraphQLState) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .with_state(state)
}

/// Execute a GraphQL request sent as a POST body
async fn graphql_post(State(state): State<GraphQLState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// Serve GraphiQL or execute a query from the query string
async fn graphql_get(
    State(state): State<GraphQLState>,
    headers: HeaderMap,
    req: Result<GraphQLRequest, GraphQLRejection>,
) -> Response {
    if state.graphiql && accepts_html(&headers) {
        return graphiql().into_response();
    }

    let request = match req {
        Ok(req) => req.into_inner(),
        Err(rejection) => return rejection.into_response(),
    };

    if is_mutation(&request) {
        tracing::debug!("Rejected mutation sent over GET");
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            Json(serde_json::json!({
                "errors": [{ "message": "Can only perform a mutation operation from a POST request." }]
            })),
        )
            .into_response();
    }

    GraphQLResponse::from(state.schema.execute(request).await).into_response()
}

/// GraphiQL interactive explorer
fn graphiql() -> Html<String> {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint(GRAPHQL_PATH)
            .finish(),
    )
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false)
}

/// Whether the operation that would run is a mutation
///
/// Unparseable documents, unknown operation names and anonymous requests
/// against a multi-operation document are let through so the schema reports
/// the error in the usual GraphQL error format.
fn is_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };

    let mut operations = document.operations.iter();
    let selected = match request.operation_name.as_deref() {
        Some(wanted) => operations.find(|(name, _)| name.map(|n| n.as_str()) == Some(wanted)),
        None => match (operations.next(), operations.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        },
    };

    selected.is_some_and(|(_, operation)| operation.node.ty == OperationType::Mutation)
}
