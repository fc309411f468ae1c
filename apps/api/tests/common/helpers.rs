//! Test helper functions for API integration tests
//!
//! Provides utilities for executing GraphQL documents against a schema or
//! a router and unpacking the JSON results.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use bookshelf_api::BookshelfSchema;

/// Execute a document and return its `data` as JSON, panicking on errors
pub async fn execute_ok(schema: &BookshelfSchema, query: &str) -> Value {
    let response = schema.execute(query).await;
    assert!(
        response.errors.is_empty(),
        "unexpected GraphQL errors: {:?}",
        response.errors
    );
    response.data.into_json().expect("data converts to JSON")
}

/// Execute a document and return the error messages it produced
pub async fn execute_err(schema: &BookshelfSchema, query: &str) -> Vec<String> {
    let response = schema.execute(query).await;
    assert!(!response.errors.is_empty(), "expected GraphQL errors");
    response.errors.into_iter().map(|e| e.message).collect()
}

/// POST a GraphQL document to `/graphql`
pub async fn post_graphql(app: Router, query: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "query": query }).to_string();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/graphql")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    (status, read_json(response.into_body()).await)
}

/// Read a response body as JSON
pub async fn read_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as text
pub async fn read_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
