//! User account storage port

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    entities::User,
    value_objects::{UserId, Username},
};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for user account persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account
    ///
    /// Returns `ApplicationError::Conflict` if the username is taken.
    async fn insert(&self, user: &User) -> Result<(), ApplicationError>;

    /// Look up an account by username
    async fn find_by_username(&self, username: &Username)
    -> Result<Option<User>, ApplicationError>;

    /// Set `updated_at`; returns `false` if the account does not exist
    async fn touch(&self, id: &UserId, at: DateTime<Utc>) -> Result<bool, ApplicationError>;
}
