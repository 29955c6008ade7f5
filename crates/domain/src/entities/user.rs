//! User account entity

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::value_objects::{UserId, Username};

/// A registered account
///
/// Credentials are stored as a per-user salt plus the password hash; the
/// plaintext password never reaches this type.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: UserId,
    username: Username,
    #[serde(skip_serializing)]
    salt: String,
    #[serde(skip_serializing)]
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    active: bool,
}

impl User {
    /// Create a new, active account
    #[must_use]
    pub fn new(username: Username, salt: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username,
            salt,
            password_hash,
            created_at: now,
            updated_at: now,
            active: true,
        }
    }

    /// Restore an account from storage
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn restore(
        id: UserId,
        username: Username,
        salt: String,
        password_hash: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        active: bool,
    ) -> Self {
        Self {
            id,
            username,
            salt,
            password_hash,
            created_at,
            updated_at,
            active,
        }
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn salt(&self) -> &str {
        &self.salt
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Refresh the update timestamp after a successful login
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
