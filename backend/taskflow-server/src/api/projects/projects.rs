//! Project REST API handlers
//!
//! Every operation is a direct pass-through to the repository: validate,
//! fetch or write one record, serialize. Errors are terminal for the
//! request; there is no retry anywhere on this path.

use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, DeleteResponse, ProjectDto,
    UpdateProjectRequest,
};

use taskflow_core::{Project, ProjectId};
use taskflow_db::ProjectRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/projects
///
/// List all projects, newest first
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// POST /api/projects
///
/// Create a new project. The server assigns id and creation timestamp.
pub async fn create_project(
    State(state): State<AppState>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectDto>)> {
    let name = validate_name(&req.name)?;
    let project = Project::new(name, req.description);

    let repo = ProjectRepository::new(state.pool.clone());
    repo.create(&project).await?;

    log::info!("Created project {}", project.id);

    Ok((StatusCode::CREATED, Json(project.into())))
}

/// PUT /api/projects/:id
///
/// Update a project. Only the fields present in the request change;
/// an omitted field keeps its stored value.
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id = ProjectId::parse(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let mut project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    if let Some(ref name) = req.name {
        project.name = validate_name(name)?;
    }
    if let Some(description) = req.description {
        project.description = Some(description);
    }

    repo.update(&project).await?;

    log::info!("Updated project {}", project.id);

    Ok(Json(project.into()))
}

/// DELETE /api/projects/:id
///
/// Remove a project. Irreversible; there is no tombstone.
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let project_id = ProjectId::parse(&id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let removed = repo.delete(project_id).await?;

    // rows_affected doubles as the existence check, so a racing second
    // delete resolves to 404 instead of a false confirmation
    if !removed {
        return Err(ApiError::NotFound {
            message: format!("Project {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted project {}", id);

    Ok(Json(DeleteResponse {
        message: "Project deleted successfully".to_string(),
    }))
}

/// Trim and reject blank names. `name` is never persisted empty.
#[track_caller]
fn validate_name(raw: &str) -> ApiResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ApiError::Validation {
            message: "name must not be empty".to_string(),
            field: Some("name".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(name.to_string())
}
