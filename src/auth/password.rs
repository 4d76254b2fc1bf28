//! Password hashing and verification - Argon2id
//!
//! Hashes carry their own salt and parameters as PHC-format strings
//! (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`), so verification needs no
//! extra state. The default Argon2id configuration is memory-hard, which is
//! what makes offline brute-force expensive.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::ApiError;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ApiError::internal("Failed to hash password", e))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// A wrong password is `Ok(false)`, never an error; `Err` means the stored
/// hash itself is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ApiError::internal("Stored password hash is malformed", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
