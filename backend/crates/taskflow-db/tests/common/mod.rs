#![allow(dead_code)]

use taskflow_core::Project;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A fresh project with the given name
pub fn create_test_project(name: &str) -> Project {
    Project::new(name.to_string(), Some(format!("{} description", name)))
}

/// A project with a pinned creation timestamp, for ordering tests
pub fn create_test_project_at(name: &str, created_at: DateTime<Utc>) -> Project {
    let mut project = Project::new(name.to_string(), None);
    project.created_at = created_at;
    project
}
