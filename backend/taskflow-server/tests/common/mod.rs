#![allow(dead_code)]

//! Test infrastructure for taskflow-server API tests

use taskflow_server::AppState;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/taskflow-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    AppState {
        pool: create_test_pool().await,
    }
}

/// Insert a project row directly, bypassing the API
pub async fn seed_project(
    pool: &SqlitePool,
    id: &str,
    name: &str,
    description: Option<&str>,
    created_at_micros: i64,
) {
    sqlx::query("INSERT INTO projects (id, name, description, created_at) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(created_at_micros)
        .execute(pool)
        .await
        .expect("Failed to seed project");
}

/// One-shot a request against a clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("Request did not complete")
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a body-less request
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}
