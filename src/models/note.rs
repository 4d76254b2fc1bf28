use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note owned by exactly one user. `id`, `owner_id`, and `created_at`
/// are immutable after creation; only title and content can change.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request to create a note
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
}

/// Partial update - omitted fields keep their existing values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteNoteResponse {
    pub deleted: bool,
}
