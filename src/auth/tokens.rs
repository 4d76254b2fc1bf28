//! Session token issuance and verification
//!
//! Tokens are stateless HS256 JWTs binding a user id to an expiry. There is
//! no server-side session table and no revocation list - expiry is the only
//! termination mechanism. Every other component treats tokens as opaque
//! strings.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_hours: i64,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    /// Issue a signed token for a user id.
    pub fn issue(&self, user_id: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(self.ttl_hours)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal("Failed to sign token", e))
    }

    /// Verify a token and return the user id it was issued for.
    ///
    /// Malformed, forged, and expired tokens all collapse into the same
    /// `InvalidToken` error.
    pub fn verify(&self, token: &str) -> Result<String, ApiError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| ApiError::InvalidToken)?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let issuer = TokenIssuer::new("test-secret", 24);
        let token = issuer.issue("user-123").expect("Failed to issue");
        let user_id = issuer.verify(&token).expect("Failed to verify");
        assert_eq!(user_id, "user-123");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = TokenIssuer::new("test-secret", 24);
        let token = issuer.issue("user-123").expect("Failed to issue");

        let mut tampered = token.clone();
        tampered.pop();
        tampered.push('x');
        assert!(matches!(
            issuer.verify(&tampered),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new("test-secret", 24);
        let other = TokenIssuer::new("other-secret", 24);

        let token = issuer.issue("user-123").expect("Failed to issue");
        assert!(matches!(other.verify(&token), Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative ttl puts exp two hours in the past, well beyond the
        // default validation leeway.
        let issuer = TokenIssuer::new("test-secret", -2);
        let token = issuer.issue("user-123").expect("Failed to issue");
        assert!(matches!(issuer.verify(&token), Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = TokenIssuer::new("test-secret", 24);
        assert!(matches!(
            issuer.verify("not.a.jwt"),
            Err(ApiError::InvalidToken)
        ));
    }
}
