//! SQLite user account store
//!
//! Implements the `UserStore` port using SQLite.

use std::sync::Arc;

use application::{error::ApplicationError, ports::UserStore};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use domain::{
    entities::User,
    value_objects::{UserId, Username},
};
use rusqlite::{ErrorCode, OptionalExtension, Row, params};
use tokio::task;
use tracing::{debug, instrument};

use super::connection::ConnectionPool;

/// SQLite-based user account store
#[derive(Debug, Clone)]
pub struct SqliteUserStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteUserStore {
    /// Create a new SQLite user store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn conversion_error(
    column: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
}

/// Convert a database row to a `User`
fn row_to_user(row: &Row<'_>) -> Result<User, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let username_str: String = row.get(1)?;
    let salt: String = row.get(2)?;
    let password_hash: String = row.get(3)?;
    let created_at_str: String = row.get(4)?;
    let updated_at_str: String = row.get(5)?;
    let active: bool = row.get(6)?;

    let id = UserId::parse(&id_str).map_err(|e| conversion_error(0, e))?;
    let username = Username::new(&username_str).map_err(|e| conversion_error(1, e))?;

    let created_at = DateTime::parse_from_rfc3339(&created_at_str)
        .map_err(|e| conversion_error(4, e))?
        .with_timezone(&Utc);
    let updated_at = DateTime::parse_from_rfc3339(&updated_at_str)
        .map_err(|e| conversion_error(5, e))?
        .with_timezone(&Utc);

    Ok(User::restore(
        id,
        username,
        salt,
        password_hash,
        created_at,
        updated_at,
        active,
    ))
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation
    )
}

#[async_trait]
impl UserStore for SqliteUserStore {
    #[instrument(skip(self, user), fields(user_id = %user.id(), username = %user.username()))]
    async fn insert(&self, user: &User) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let user = user.clone();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.execute(
                "INSERT INTO users (id, username, salt, password_hash, created_at, updated_at, active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    user.id().to_string(),
                    user.username().as_str(),
                    user.salt(),
                    user.password_hash(),
                    timestamp(user.created_at()),
                    timestamp(user.updated_at()),
                    user.is_active(),
                ],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApplicationError::Conflict("Username already exists".to_string())
                } else {
                    ApplicationError::Internal(e.to_string())
                }
            })?;

            debug!("Inserted user");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(username = %username))]
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let username = username.as_str().to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            conn.query_row(
                "SELECT id, username, salt, password_hash, created_at, updated_at, active
                 FROM users WHERE username = ?1",
                [&username],
                row_to_user,
            )
            .optional()
            .map_err(|e| ApplicationError::Internal(e.to_string()))
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn touch(&self, id: &UserId, at: DateTime<Utc>) -> Result<bool, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id = id.to_string();

        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            let updated = conn
                .execute(
                    "UPDATE users SET updated_at = ?1 WHERE id = ?2",
                    params![timestamp(at), id],
                )
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;

            debug!(updated = updated > 0, "Touched user");
            Ok(updated > 0)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
