//! Note storage - every query below the service layer is already scoped by
//! owner, so cross-owner reads cannot happen even if a caller skips the
//! service checks.

use chrono::Utc;
use rusqlite::{params, Result as SqliteResult};
use uuid::Uuid;

use super::super::sqlite::{timestamp_from_sql, timestamp_to_sql, Database};
use crate::models::Note;

impl Database {
    /// Insert a note, assigning id and created_at
    pub fn create_note(&self, owner_id: &str, title: &str, content: &str) -> SqliteResult<Note> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        conn.execute(
            "INSERT INTO notes (id, owner_id, title, content, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![id, owner_id, title, content, timestamp_to_sql(created_at)],
        )?;

        Ok(Note {
            id,
            owner_id: owner_id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at,
        })
    }

    /// All notes for an owner, newest first. rowid breaks same-instant ties
    /// so insertion order is preserved within a timestamp.
    pub fn list_notes_by_owner(&self, owner_id: &str) -> SqliteResult<Vec<Note>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT id, owner_id, title, content, created_at FROM notes
             WHERE owner_id = ?1
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let notes = stmt
            .query_map([owner_id], |row| Self::row_to_note(row))?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(notes)
    }

    /// Lookup constrained to both id and owner simultaneously
    pub fn find_note_by_id_and_owner(
        &self,
        id: &str,
        owner_id: &str,
    ) -> SqliteResult<Option<Note>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT id, owner_id, title, content, created_at FROM notes
             WHERE id = ?1 AND owner_id = ?2",
        )?;

        let note = stmt
            .query_row([id, owner_id], |row| Self::row_to_note(row))
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        Ok(note)
    }

    /// Persist new title/content for a note. id, owner_id, and created_at
    /// never change.
    pub fn update_note(
        &self,
        id: &str,
        owner_id: &str,
        title: &str,
        content: &str,
    ) -> SqliteResult<usize> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "UPDATE notes SET title = ?1, content = ?2 WHERE id = ?3 AND owner_id = ?4",
            params![title, content, id, owner_id],
        )
    }

    /// Remove a note
    pub fn delete_note(&self, id: &str, owner_id: &str) -> SqliteResult<usize> {
        let conn = self.conn.lock().unwrap();

        conn.execute(
            "DELETE FROM notes WHERE id = ?1 AND owner_id = ?2",
            params![id, owner_id],
        )
    }

    fn row_to_note(row: &rusqlite::Row) -> SqliteResult<Note> {
        let created_at_str: String = row.get(4)?;
        Ok(Note {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
            created_at: timestamp_from_sql(4, &created_at_str)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn open_db(dir: &tempfile::TempDir) -> Database {
        let db_path = dir.path().join("test.db");
        Database::new(db_path.to_str().unwrap()).expect("Failed to open database")
    }

    fn make_user(db: &Database, email: &str) -> String {
        db.create_user(email, "hash").expect("create user").id
    }

    #[test]
    fn test_create_and_find_note() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);
        let owner = make_user(&db, "a@x.com");

        let note = db
            .create_note(&owner, "Groceries", "Milk, eggs")
            .expect("Failed to create note");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.owner_id, owner);

        let found = db
            .find_note_by_id_and_owner(&note.id, &owner)
            .expect("Lookup failed")
            .expect("Note missing");
        assert_eq!(found.content, "Milk, eggs");
        assert_eq!(found.id, note.id);
    }

    #[test]
    fn test_find_is_scoped_to_owner() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);
        let alice = make_user(&db, "a@x.com");
        let bob = make_user(&db, "b@x.com");

        let note = db.create_note(&alice, "Private", "secret").expect("create");

        // Bob cannot see Alice's note even with the exact id
        assert!(db.find_note_by_id_and_owner(&note.id, &bob).unwrap().is_none());
        assert!(db.find_note_by_id_and_owner(&note.id, &alice).unwrap().is_some());
    }

    #[test]
    fn test_list_is_newest_first() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);
        let owner = make_user(&db, "a@x.com");

        db.create_note(&owner, "first", "1").expect("create");
        db.create_note(&owner, "second", "2").expect("create");
        db.create_note(&owner, "third", "3").expect("create");

        let notes = db.list_notes_by_owner(&owner).expect("list");
        let titles: Vec<&str> = notes.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_list_excludes_other_owners() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);
        let alice = make_user(&db, "a@x.com");
        let bob = make_user(&db, "b@x.com");

        db.create_note(&alice, "Alice note", "").expect("create");
        db.create_note(&bob, "Bob note", "").expect("create");

        let notes = db.list_notes_by_owner(&alice).expect("list");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Alice note");
    }

    #[test]
    fn test_list_empty_is_ok() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);
        let owner = make_user(&db, "a@x.com");

        assert!(db.list_notes_by_owner(&owner).expect("list").is_empty());
    }

    #[test]
    fn test_update_and_delete_scoped_to_owner() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);
        let alice = make_user(&db, "a@x.com");
        let bob = make_user(&db, "b@x.com");

        let note = db.create_note(&alice, "Title", "Body").expect("create");

        // Update as the wrong owner touches nothing
        let changed = db.update_note(&note.id, &bob, "Hacked", "Hacked").expect("update");
        assert_eq!(changed, 0);

        let changed = db.update_note(&note.id, &alice, "New title", "New body").expect("update");
        assert_eq!(changed, 1);

        let found = db
            .find_note_by_id_and_owner(&note.id, &alice)
            .unwrap()
            .unwrap();
        assert_eq!(found.title, "New title");
        // created_at is untouched by updates (storage precision is micros)
        assert_eq!(
            found.created_at.timestamp_micros(),
            note.created_at.timestamp_micros()
        );

        assert_eq!(db.delete_note(&note.id, &bob).expect("delete"), 0);
        assert_eq!(db.delete_note(&note.id, &alice).expect("delete"), 1);
        assert!(db.find_note_by_id_and_owner(&note.id, &alice).unwrap().is_none());
    }
}
