//! Account service
//!
//! Registration and login for user accounts.

use std::{fmt, sync::Arc};

use domain::{
    User,
    value_objects::{Username, check_password_strength},
};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{HashedPassword, PasswordHasherPort, UserStore},
};

const MISSING_CREDENTIALS: &str = "Username and password are required";
const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Account registration and authentication
pub struct AccountService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasherPort>,
}

impl fmt::Debug for AccountService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

impl AccountService {
    /// Create a new account service
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasherPort>) -> Self {
        Self { users, hasher }
    }

    /// Register a new account
    ///
    /// # Errors
    ///
    /// - `Validation` for missing fields, a short username, or a weak password
    /// - `Conflict` if the username is already taken
    #[instrument(skip(self, raw_username, password), fields(username = %raw_username.trim()))]
    pub async fn register(
        &self,
        raw_username: &str,
        password: &str,
    ) -> Result<User, ApplicationError> {
        require_credentials(raw_username, password)?;
        let username = Username::new(raw_username)?;
        check_password_strength(password)?;

        if self.users.find_by_username(&username).await?.is_some() {
            debug!("Username already taken");
            return Err(ApplicationError::Conflict(
                "Username already exists".to_string(),
            ));
        }

        let hashed = self.hash_password(password).await?;
        let user = User::new(username, hashed.salt, hashed.hash);
        self.users.insert(&user).await?;

        info!(user_id = %user.id(), "User registered");
        Ok(user)
    }

    /// Authenticate an account
    ///
    /// Unknown users, deactivated users, and wrong passwords are reported
    /// identically. A successful login refreshes `updated_at`.
    #[instrument(skip(self, raw_username, password), fields(username = %raw_username.trim()))]
    pub async fn login(&self, raw_username: &str, password: &str) -> Result<User, ApplicationError> {
        require_credentials(raw_username, password)?;

        let Ok(username) = Username::new(raw_username) else {
            return Err(invalid_credentials());
        };

        let Some(mut user) = self.users.find_by_username(&username).await? else {
            debug!("Login for unknown user");
            return Err(invalid_credentials());
        };

        if !user.is_active() {
            warn!(user_id = %user.id(), "Login attempt for inactive user");
            return Err(invalid_credentials());
        }

        if !self.verify_password(password, &user).await? {
            warn!(user_id = %user.id(), "Login with wrong password");
            return Err(invalid_credentials());
        }

        user.touch();
        if !self.users.touch(&user.id(), user.updated_at()).await? {
            warn!(user_id = %user.id(), "User vanished during login");
        }

        info!(user_id = %user.id(), "User logged in");
        Ok(user)
    }

    /// Hashing is CPU-bound and runs on the blocking pool
    async fn hash_password(&self, password: &str) -> Result<HashedPassword, ApplicationError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(hashing_task_failed)?
    }

    async fn verify_password(&self, password: &str, user: &User) -> Result<bool, ApplicationError> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_owned();
        let salt = user.salt().to_owned();
        let hash = user.password_hash().to_owned();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &salt, &hash))
            .await
            .map_err(hashing_task_failed)?
    }
}

fn hashing_task_failed(err: tokio::task::JoinError) -> ApplicationError {
    ApplicationError::Internal(format!("Password hashing task failed: {err}"))
}

fn require_credentials(raw_username: &str, password: &str) -> Result<(), ApplicationError> {
    if raw_username.trim().is_empty() || password.is_empty() {
        return Err(ApplicationError::Validation(MISSING_CREDENTIALS.to_string()));
    }
    Ok(())
}

fn invalid_credentials() -> ApplicationError {
    ApplicationError::NotAuthorized(INVALID_CREDENTIALS.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use domain::value_objects::UserId;

    use std::{
        sync::Mutex,
        thread::{self, ThreadId},
    };

    use super::*;
    use crate::ports::{MockPasswordHasherPort, MockUserStore};

    const STRONG: &str = "Sunny#Day1";

    fn stored_user(active: bool) -> User {
        let created = Utc::now() - chrono::Duration::days(2);
        User::restore(
            UserId::new(),
            Username::new("alice").unwrap(),
            "salt".to_string(),
            "hash".to_string(),
            created,
            created,
            active,
        )
    }

    fn unused_hasher() -> MockPasswordHasherPort {
        let mut hasher = MockPasswordHasherPort::new();
        hasher.expect_hash().times(0);
        hasher.expect_verify().times(0);
        hasher
    }

    fn validation_message(err: &ApplicationError) -> &str {
        match err {
            ApplicationError::Validation(m) => m,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn register_hashes_and_stores() {
        let mut users = MockUserStore::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users
            .expect_insert()
            .withf(|user| {
                user.username().as_str() == "alice"
                    && user.salt() == "fresh-salt"
                    && user.password_hash() == "fresh-hash"
                    && user.is_active()
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut hasher = MockPasswordHasherPort::new();
        hasher.expect_hash().withf(|p| p == STRONG).returning(|_| {
            Ok(HashedPassword {
                salt: "fresh-salt".to_string(),
                hash: "fresh-hash".to_string(),
            })
        });

        let service = AccountService::new(Arc::new(users), Arc::new(hasher));
        let user = service.register("  alice ", STRONG).await.unwrap();
        assert_eq!(user.username().as_str(), "alice");
    }

    #[tokio::test]
    async fn register_requires_both_fields() {
        let mut users = MockUserStore::new();
        users.expect_find_by_username().times(0);
        let service = AccountService::new(Arc::new(users), Arc::new(unused_hasher()));

        let err = service.register("   ", STRONG).await.unwrap_err();
        assert_eq!(validation_message(&err), MISSING_CREDENTIALS);
        let err = service.register("alice", "").await.unwrap_err();
        assert_eq!(validation_message(&err), MISSING_CREDENTIALS);
    }

    #[tokio::test]
    async fn register_rejects_short_username() {
        let service = AccountService::new(Arc::new(MockUserStore::new()), Arc::new(unused_hasher()));
        let err = service.register("al", STRONG).await.unwrap_err();
        assert_eq!(
            validation_message(&err),
            "Username must be at least 3 characters"
        );
    }

    #[tokio::test]
    async fn register_rejects_weak_password() {
        let service = AccountService::new(Arc::new(MockUserStore::new()), Arc::new(unused_hasher()));
        let err = service.register("alice", "password").await.unwrap_err();
        assert!(validation_message(&err).starts_with("Password must be at least 8 characters"));
    }

    #[tokio::test]
    async fn register_rejects_duplicate() {
        let mut users = MockUserStore::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(true))));
        users.expect_insert().times(0);

        let service = AccountService::new(Arc::new(users), Arc::new(unused_hasher()));
        let err = service.register("alice", STRONG).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Conflict(ref m) if m == "Username already exists"));
    }

    #[tokio::test]
    async fn login_succeeds_and_touches_user() {
        let mut users = MockUserStore::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(true))));
        users.expect_touch().times(1).returning(|_, _| Ok(true));

        let mut hasher = MockPasswordHasherPort::new();
        hasher
            .expect_verify()
            .withf(|password, salt, hash| password == STRONG && salt == "salt" && hash == "hash")
            .returning(|_, _, _| Ok(true));

        let service = AccountService::new(Arc::new(users), Arc::new(hasher));
        let user = service.login("alice", STRONG).await.unwrap();
        assert!(user.updated_at() > user.created_at());
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let mut users = MockUserStore::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(true))));
        users.expect_touch().times(0);

        let mut hasher = MockPasswordHasherPort::new();
        hasher.expect_verify().returning(|_, _, _| Ok(false));

        let service = AccountService::new(Arc::new(users), Arc::new(hasher));
        let err = service.login("alice", "Wrong#Pass1").await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotAuthorized(ref m) if m == INVALID_CREDENTIALS));
    }

    #[tokio::test]
    async fn login_rejects_unknown_and_inactive_users_alike() {
        let mut users = MockUserStore::new();
        users.expect_find_by_username().returning(|name| {
            if name.as_str() == "ghost" {
                Ok(None)
            } else {
                Ok(Some(stored_user(false)))
            }
        });

        let service = AccountService::new(Arc::new(users), Arc::new(unused_hasher()));

        for name in ["ghost", "alice", "x"] {
            let err = service.login(name, STRONG).await.unwrap_err();
            assert!(matches!(err, ApplicationError::NotAuthorized(ref m) if m == INVALID_CREDENTIALS));
        }
    }

    #[tokio::test]
    async fn login_requires_both_fields() {
        let service = AccountService::new(Arc::new(MockUserStore::new()), Arc::new(unused_hasher()));
        let err = service.login("alice", "").await.unwrap_err();
        assert_eq!(validation_message(&err), MISSING_CREDENTIALS);
    }

    #[tokio::test]
    async fn hashing_and_verification_leave_the_runtime_thread() {
        let runtime_thread = thread::current().id();
        let seen: Arc<Mutex<Vec<ThreadId>>> = Arc::default();

        let mut new_users = MockUserStore::new();
        new_users.expect_find_by_username().returning(|_| Ok(None));
        new_users.expect_insert().returning(|_| Ok(()));
        let mut known_users = MockUserStore::new();
        known_users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(true))));
        known_users.expect_touch().returning(|_, _| Ok(true));

        let mut hasher = MockPasswordHasherPort::new();
        let on_hash = Arc::clone(&seen);
        hasher.expect_hash().returning(move |_| {
            on_hash.lock().unwrap().push(thread::current().id());
            Ok(HashedPassword {
                salt: "salt".to_string(),
                hash: "hash".to_string(),
            })
        });
        let on_verify = Arc::clone(&seen);
        hasher.expect_verify().returning(move |_, _, _| {
            on_verify.lock().unwrap().push(thread::current().id());
            Ok(true)
        });

        let hasher: Arc<dyn PasswordHasherPort> = Arc::new(hasher);
        AccountService::new(Arc::new(new_users), Arc::clone(&hasher))
            .register("alice", STRONG)
            .await
            .unwrap();
        AccountService::new(Arc::new(known_users), hasher)
            .login("alice", STRONG)
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen.iter().all(|id| *id != runtime_thread));
    }
}
