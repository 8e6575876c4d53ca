pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        projects::{create_project, delete_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
