//! Project entity - the sole persisted record.

use crate::ProjectId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, optionally described, timestamped record.
///
/// `id` and `created_at` are assigned once at construction and never
/// change; `name` is never persisted empty (the API layer rejects it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with a fresh id and creation timestamp.
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: ProjectId::generate(),
            name,
            description,
            created_at: Utc::now(),
        }
    }
}
