use serde::Deserialize;

/// Both fields are optional; an omitted field leaves the stored value
/// untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}
