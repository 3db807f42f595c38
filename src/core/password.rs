//! Password hashing with argon2.
//!
//! Hashes are stored as PHC strings, which carry their own salt and
//! parameters, so verification needs nothing but the stored value.

use crate::errors::{Error, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

/// Hashes `plain` with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::PasswordHash {
            message: e.to_string(),
        })
}

/// Checks `plain` against a stored PHC string.
///
/// Returns `Ok(false)` on mismatch; an error only if `hash` is not a valid PHC string.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool> {
    let parsed = PasswordHash::new(hash).map_err(|e| Error::PasswordHash {
        message: e.to_string(),
    })?;
    Ok(Argon2::default()
        .verify_password(plain.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() -> Result<()> {
        let hash = hash_password("p1")?;
        assert_ne!(hash, "p1");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("p1", &hash)?);
        assert!(!verify_password("p2", &hash)?);
        Ok(())
    }

    #[test]
    fn test_same_password_gets_different_salts() -> Result<()> {
        assert_ne!(hash_password("p1")?, hash_password("p1")?);
        Ok(())
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(matches!(
            verify_password("p1", "plaintext"),
            Err(Error::PasswordHash { .. })
        ));
    }
}
