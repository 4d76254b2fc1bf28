//! Note operations, all scoped to the authenticated owner.
//!
//! `get` returns the same `NotFound` whether the note does not exist or
//! belongs to another user - a caller can never learn that someone else's
//! note id is real. Do not split the two cases.

use std::sync::Arc;

use crate::db::Database;
use crate::errors::ApiError;
use crate::models::{Note, UpdateNoteRequest};

pub struct NotesService {
    db: Arc<Database>,
}

impl NotesService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn create(&self, owner_id: &str, title: &str, content: &str) -> Result<Note, ApiError> {
        if title.trim().is_empty() {
            return Err(ApiError::Validation("Title must not be empty".to_string()));
        }
        Ok(self.db.create_note(owner_id, title, content)?)
    }

    /// All of the owner's notes, newest first.
    pub fn list(&self, owner_id: &str) -> Result<Vec<Note>, ApiError> {
        Ok(self.db.list_notes_by_owner(owner_id)?)
    }

    pub fn get(&self, id: &str, owner_id: &str) -> Result<Note, ApiError> {
        self.db
            .find_note_by_id_and_owner(id, owner_id)?
            .ok_or(ApiError::NotFound)
    }

    /// Apply a partial update. Fields missing from the patch keep their
    /// existing values.
    pub fn update(
        &self,
        id: &str,
        owner_id: &str,
        patch: &UpdateNoteRequest,
    ) -> Result<Note, ApiError> {
        let existing = self.get(id, owner_id)?;

        let title = patch.title.as_deref().unwrap_or(&existing.title);
        let content = patch.content.as_deref().unwrap_or(&existing.content);

        if title.trim().is_empty() {
            return Err(ApiError::Validation("Title must not be empty".to_string()));
        }

        self.db.update_note(id, owner_id, title, content)?;

        Ok(Note {
            title: title.to_string(),
            content: content.to_string(),
            ..existing
        })
    }

    pub fn delete(&self, id: &str, owner_id: &str) -> Result<(), ApiError> {
        // Ownership check first so a foreign id fails with NotFound
        self.get(id, owner_id)?;
        self.db.delete_note(id, owner_id)?;
        Ok(())
    }
}
