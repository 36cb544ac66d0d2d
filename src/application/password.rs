//! Password hashing and verification.
//!
//! Passwords are hashed with Argon2id (default parameters) and a random
//! 128-bit salt. The result is stored as a PHC string, which embeds the
//! algorithm, parameters and salt, so verification needs nothing else.

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}

/// Hashes a plaintext password into a PHC string.
///
/// Two calls with the same input produce different hashes because each
/// call draws a fresh salt.
///
/// # Errors
///
/// Returns [`PasswordError::HashingFailed`] if Argon2 rejects the input.
pub fn hash_password(plain: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))
}

/// Well-formed Argon2id hash with the default parameters that matches no
/// password. Verifying against it costs as much as verifying a real hash.
pub const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$ZW1wbG95ZWUtbWdtdC0xNg$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

/// Verifies a plaintext password against a stored PHC string.
///
/// Returns `false` on mismatch and on an unparsable hash.
pub fn verify_password(plain: &str, phc: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(phc) else {
        return false;
    };

    Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok()
}
