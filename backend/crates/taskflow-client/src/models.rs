use serde::{Deserialize, Serialize};

/// Wire shape of a project as the API returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Epoch seconds
    pub created_at: i64,
}

/// Confirmation body from DELETE
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteMessage {
    pub message: String,
}
