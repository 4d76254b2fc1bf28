//! SQLite database handle and schema.
//!
//! Email uniqueness lives in the schema (`UNIQUE` on users.email), not in
//! application code, so concurrent registrations with the same email can
//! never both succeed.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;
use std::sync::Mutex;

pub struct Database {
    pub(crate) conn: Mutex<Connection>,
}

impl Database {
    /// Open (or create) the database at the given path and apply the schema.
    pub fn new(database_url: &str) -> SqliteResult<Self> {
        if let Some(parent) = Path::new(database_url).parent() {
            std::fs::create_dir_all(parent).ok();
        }

        let conn = Connection::open(database_url)?;
        Self::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> SqliteResult<()> {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;

             CREATE TABLE IF NOT EXISTS users (
                 id TEXT PRIMARY KEY,
                 email TEXT NOT NULL UNIQUE,
                 password_hash TEXT NOT NULL,
                 created_at TEXT NOT NULL
             );

             CREATE TABLE IF NOT EXISTS notes (
                 id TEXT PRIMARY KEY,
                 owner_id TEXT NOT NULL REFERENCES users(id),
                 title TEXT NOT NULL,
                 content TEXT NOT NULL,
                 created_at TEXT NOT NULL
             );

             CREATE INDEX IF NOT EXISTS idx_notes_owner ON notes(owner_id);",
        )
    }
}

/// Format a timestamp for storage. Fixed microsecond precision keeps the
/// column lexicographically sortable, so ORDER BY created_at is chronological.
pub(crate) fn timestamp_to_sql(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp back into a `DateTime<Utc>`.
pub(crate) fn timestamp_from_sql(idx: usize, value: &str) -> SqliteResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("nested").join("notes.db");

        let db = Database::new(db_path.to_str().unwrap());
        assert!(db.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_schema_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("notes.db");
        let path = db_path.to_str().unwrap();

        Database::new(path).expect("first open");
        Database::new(path).expect("second open");
    }

    #[test]
    fn test_timestamp_round_trip() {
        let now = Utc::now();
        let stored = timestamp_to_sql(now);
        let parsed = timestamp_from_sql(0, &stored).expect("parse");
        // Storage precision is microseconds
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }
}
