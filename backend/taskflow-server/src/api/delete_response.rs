use serde::Serialize;

/// Confirmation body returned by DELETE handlers
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}
