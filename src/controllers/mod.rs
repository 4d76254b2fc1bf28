pub mod auth;
pub mod health;
pub mod notes;

use actix_web::{web, HttpRequest};

use crate::errors::ApiError;
use crate::AppState;

/// Pull the bearer token off a request. A missing or malformed header is
/// the same `InvalidToken` failure as a forged token.
pub(crate) fn bearer_token(req: &HttpRequest) -> Result<&str, ApiError> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .ok_or(ApiError::InvalidToken)
}

/// Resolve the bearer token on a request to the owner id it was issued for.
pub(crate) fn authenticate(
    state: &web::Data<AppState>,
    req: &HttpRequest,
) -> Result<String, ApiError> {
    state.tokens.verify(bearer_token(req)?)
}
