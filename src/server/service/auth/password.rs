//! Password hashing with Argon2id.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use std::sync::LazyLock;

use crate::server::error::{internal::InternalError, AppError};

const SALT_LENGTH: usize = 16;

/// Digest checked when no account matches, so unknown emails cost one Argon2 run too.
static PLACEHOLDER_DIGEST: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("zyx-placeholder-password").ok());

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Arguments
/// - `password` - Plain-text password
///
/// # Returns
/// - `Ok(String)` - PHC-formatted digest embedding the salt and parameters
/// - `Err(AppError::Internal)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt_bytes = [0u8; SALT_LENGTH];
    rand::rng().fill(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    let digest = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(digest.to_string())
}

/// Checks a password against a stored digest.
///
/// A digest that cannot be parsed is logged and treated as a mismatch.
pub fn verify_password(password: &str, digest: &str) -> bool {
    let parsed = match PasswordHash::new(digest) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!("Stored password digest is malformed: {}", e);
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Runs a full verification against a placeholder digest and always reports a mismatch.
///
/// Used when the account does not exist so the response takes as long as a wrong password.
pub fn verify_placeholder(password: &str) -> bool {
    if let Some(digest) = PLACEHOLDER_DIGEST.as_deref() {
        verify_password(password, digest);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let digest = hash_password("hunter22").unwrap();

        assert!(digest.starts_with("$argon2id$"));
        assert!(verify_password("hunter22", &digest));
    }

    #[test]
    fn rejects_wrong_password() {
        let digest = hash_password("hunter22").unwrap();

        assert!(!verify_password("hunter23", &digest));
    }

    #[test]
    fn salts_each_hash() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("same", &first));
        assert!(verify_password("same", &second));
    }

    #[test]
    fn placeholder_never_verifies() {
        assert!(PLACEHOLDER_DIGEST.as_deref().is_some_and(|d| d.starts_with("$argon2id$")));
        assert!(!verify_placeholder("zyx-placeholder-password"));
        assert!(!verify_placeholder("anything"));
    }

    #[test]
    fn malformed_digest_never_verifies() {
        assert!(!verify_password("anything", "not-a-digest"));
        assert!(!verify_password("", ""));
    }
}
