//! Password hashing using Argon2
//!
//! Hashes account passwords with Argon2id and a fresh random salt per
//! account. The salt is returned separately so it can be stored in its own
//! column; the hash itself is the self-describing PHC string.
//!
//! # Examples
//!
//! ```
//! use application::ports::PasswordHasherPort;
//! use infrastructure::adapters::Argon2PasswordHasher;
//!
//! let hasher = Argon2PasswordHasher::new();
//! let hashed = hasher.hash("Str0ng!Pass").unwrap();
//!
//! assert!(hasher.verify("Str0ng!Pass", &hashed.salt, &hashed.hash).unwrap());
//! assert!(!hasher.verify("wrong", &hashed.salt, &hashed.hash).unwrap());
//! ```

use application::{
    error::ApplicationError,
    ports::{HashedPassword, PasswordHasherPort},
};
use argon2::{
    Argon2, PasswordHash, PasswordHasher as ArgonPasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::{debug, instrument, warn};

/// Account password hasher using Argon2id with default parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    /// Create a new password hasher
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    #[instrument(skip(self, password))]
    fn hash(&self, password: &str) -> Result<HashedPassword, ApplicationError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| ApplicationError::Internal(format!("Failed to hash password: {e}")))?;

        debug!("Hashed password");
        Ok(HashedPassword {
            salt: salt.as_str().to_string(),
            hash: hash.to_string(),
        })
    }

    #[instrument(skip(self, password, salt, hash))]
    fn verify(&self, password: &str, salt: &str, hash: &str) -> Result<bool, ApplicationError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| ApplicationError::Internal(format!("Invalid password hash: {e}")))?;

        // The stored salt column must agree with the salt inside the PHC string.
        if parsed.salt.map(|s| s.as_str()) != Some(salt) {
            warn!("Stored salt does not match password hash");
            return Ok(false);
        }

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_creates_valid_phc_format() {
        let hashed = Argon2PasswordHasher::new().hash("Str0ng!Pass").unwrap();

        assert!(hashed.hash.starts_with("$argon2id$"));
        assert!(hashed.hash.contains(&hashed.salt));
    }

    #[test]
    fn verify_correct_password_succeeds() {
        let hasher = Argon2PasswordHasher::new();
        let hashed = hasher.hash("Str0ng!Pass").unwrap();

        assert!(hasher.verify("Str0ng!Pass", &hashed.salt, &hashed.hash).unwrap());
    }

    #[test]
    fn verify_wrong_password_fails() {
        let hasher = Argon2PasswordHasher::new();
        let hashed = hasher.hash("Str0ng!Pass").unwrap();

        assert!(!hasher.verify("Str0ng!Pasz", &hashed.salt, &hashed.hash).unwrap());
    }

    #[test]
    fn verify_with_mismatched_salt_fails() {
        let hasher = Argon2PasswordHasher::new();
        let first = hasher.hash("Str0ng!Pass").unwrap();
        let second = hasher.hash("Str0ng!Pass").unwrap();

        assert!(!hasher.verify("Str0ng!Pass", &second.salt, &first.hash).unwrap());
    }

    #[test]
    fn verify_invalid_hash_returns_error() {
        let result = Argon2PasswordHasher::new().verify("Str0ng!Pass", "salt", "not-a-hash");
        assert!(matches!(result, Err(ApplicationError::Internal(_))));
    }

    #[test]
    fn same_password_gets_different_salts() {
        let hasher = Argon2PasswordHasher::new();
        let a = hasher.hash("Str0ng!Pass").unwrap();
        let b = hasher.hash("Str0ng!Pass").unwrap();

        assert_ne!(a.salt, b.salt);
        assert_ne!(a.hash, b.hash);
    }
}
