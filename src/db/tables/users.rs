//! User credential storage

use chrono::Utc;
use rusqlite::{params, Result as SqliteResult};
use uuid::Uuid;

use super::super::sqlite::{timestamp_from_sql, timestamp_to_sql, Database};
use crate::errors::ApiError;
use crate::models::User;

impl Database {
    /// Insert a new user. Email uniqueness is enforced by the UNIQUE
    /// constraint, so two concurrent registrations with the same email
    /// cannot both succeed - the loser sees `DuplicateEmail`.
    pub fn create_user(&self, email: &str, password_hash: &str) -> Result<User, ApiError> {
        let conn = self.conn.lock().unwrap();
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now();

        let result = conn.execute(
            "INSERT INTO users (id, email, password_hash, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![id, email, password_hash, timestamp_to_sql(created_at)],
        );

        match result {
            Ok(_) => Ok(User {
                id,
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                created_at,
            }),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(ApiError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Exact-match lookup by email
    pub fn find_user_by_email(&self, email: &str) -> SqliteResult<Option<User>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?1",
        )?;

        let user = stmt
            .query_row([email], |row| Self::row_to_user(row))
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        Ok(user)
    }

    /// Lookup by id (used to resolve the authenticated user from a token)
    pub fn find_user_by_id(&self, id: &str) -> SqliteResult<Option<User>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt =
            conn.prepare("SELECT id, email, password_hash, created_at FROM users WHERE id = ?1")?;

        let user = stmt
            .query_row([id], |row| Self::row_to_user(row))
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        Ok(user)
    }

    fn row_to_user(row: &rusqlite::Row) -> SqliteResult<User> {
        let created_at_str: String = row.get(3)?;
        Ok(User {
            id: row.get(0)?,
            email: row.get(1)?,
            password_hash: row.get(2)?,
            created_at: timestamp_from_sql(3, &created_at_str)?,
        })
    }
}
