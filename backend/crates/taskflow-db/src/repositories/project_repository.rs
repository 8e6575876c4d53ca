//! Project repository for CRUD operations on the projects table.
//!
//! The sqlite file is treated as a plain document store: only create,
//! find-all, find-by-id, update and delete are consumed. Timestamps are
//! stored as epoch microseconds; listing orders by `created_at`
//! descending with rowid as tie-break, so equal timestamps fall back to
//! insertion order (newest first).
//!
//! Deletes are hard deletes. There is no tombstone and no way back.

use crate::{DbError, Result as DbErrorResult};

use taskflow_core::{Project, ProjectId};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, project: &Project) -> DbErrorResult<()> {
        let id = project.id.to_string();
        let created_at = project.created_at.timestamp_micros();

        sqlx::query(
            r#"
                INSERT INTO projects (id, name, description, created_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&project.name)
        .bind(project.description.as_deref())
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: ProjectId) -> DbErrorResult<Option<Project>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, description, created_at
                FROM projects
                WHERE id = ?
            "#,
        )
        .bind(id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.map(decode_project).transpose()
    }

    /// All projects, newest first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, description, created_at
                FROM projects
                ORDER BY created_at DESC, rowid DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(decode_project)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Persist `name` and `description`. `id` and `created_at` are
    /// immutable and never written after creation.
    pub async fn update(&self, project: &Project) -> DbErrorResult<()> {
        let id = project.id.to_string();

        sqlx::query(
            r#"
                UPDATE projects
                SET name = ?, description = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(project.description.as_deref())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove the row. Returns whether a row was actually deleted, so
    /// callers can distinguish a no-op from a real removal.
    pub async fn delete(&self, id: ProjectId) -> DbErrorResult<bool> {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id_str)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn decode_project(row: SqliteRow) -> DbErrorResult<Project> {
    let id: String = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let description: Option<String> = row.try_get("description")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Project {
        id: ProjectId::parse(&id).map_err(|e| DbError::Initialization {
            message: format!("Invalid id in projects.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        name,
        description,
        created_at: DateTime::from_timestamp_micros(created_at).ok_or_else(|| {
            DbError::Initialization {
                message: "Invalid timestamp in projects.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?,
    })
}
