//! Registration and login orchestration.
//!
//! Login merges "no such user" and "wrong password" into one
//! `InvalidCredentials` error so callers cannot probe which emails are
//! registered. Do not split the two cases.

use std::sync::Arc;

use super::{password, tokens::TokenIssuer};
use crate::db::Database;
use crate::errors::ApiError;
use crate::models::User;

pub struct AuthService {
    db: Arc<Database>,
    tokens: Arc<TokenIssuer>,
}

impl AuthService {
    pub fn new(db: Arc<Database>, tokens: Arc<TokenIssuer>) -> Self {
        Self { db, tokens }
    }

    /// Register a new account and issue its first session token.
    ///
    /// Not idempotent: a second call with the same email fails with
    /// `DuplicateEmail` (propagated unchanged from the store).
    pub fn register(&self, email: &str, password: &str) -> Result<(User, String), ApiError> {
        validate_credentials(email, password)?;

        let hash = password::hash_password(password)?;
        let user = self.db.create_user(email, &hash)?;
        let token = self.tokens.issue(&user.id)?;

        log::info!("Registered user {}", user.id);
        Ok((user, token))
    }

    /// Authenticate an existing account and issue a fresh session token.
    /// Safely retryable.
    pub fn login(&self, email: &str, password: &str) -> Result<(User, String), ApiError> {
        let user = self
            .db
            .find_user_by_email(email)?
            .ok_or(ApiError::InvalidCredentials)?;

        if !password::verify_password(password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.id)?;
        Ok((user, token))
    }

    /// Resolve a bearer token to the stored user.
    pub fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let user_id = self.tokens.verify(token)?;
        self.db
            .find_user_by_id(&user_id)?
            // A valid signature for a user that no longer exists is still a
            // dead credential.
            .ok_or(ApiError::InvalidToken)
    }
}

fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if !email.contains('@') || email.trim().is_empty() {
        return Err(ApiError::Validation("A valid email is required".to_string()));
    }
    if password.len() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}
