//! Password hashing port

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Salt and hash produced for a new password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPassword {
    pub salt: String,
    pub hash: String,
}

/// Port for salted password hashing
#[cfg_attr(test, automock)]
pub trait PasswordHasherPort: Send + Sync {
    /// Hash a password with a freshly generated salt
    fn hash(&self, password: &str) -> Result<HashedPassword, ApplicationError>;

    /// Check a password against a stored salt and hash
    fn verify(&self, password: &str, salt: &str, hash: &str) -> Result<bool, ApplicationError>;
}
