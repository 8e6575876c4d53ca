use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name (required, must be non-blank)
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}
