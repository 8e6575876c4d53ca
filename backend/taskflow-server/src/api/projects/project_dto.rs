use taskflow_core::Project;

use serde::Serialize;

/// Project DTO for JSON serialization.
///
/// Field names are camelCase on the wire; `description` is omitted
/// entirely when absent (never null), `createdAt` is epoch seconds.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: i64,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            description: p.description,
            created_at: p.created_at.timestamp(),
        }
    }
}
