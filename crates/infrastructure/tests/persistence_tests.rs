//! Integration tests for the persistence layer using file-backed SQLite
//!
//! These tests wire the real stores and password hasher into the
//! application services.

#![allow(clippy::expect_used)]

use std::sync::Arc;

use application::{
    ApplicationError,
    ports::{UserStore, WeatherHistoryStore},
    services::AccountService,
};
use chrono::{Duration, Utc};
use domain::{PlaceQuery, Username, WeatherRecord};
use infrastructure::{
    Argon2PasswordHasher, ConnectionPool, DatabaseConfig, SqliteUserStore,
    SqliteWeatherHistoryStore, create_pool,
};
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn create_test_pool() -> (TempDir, Arc<ConnectionPool>) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = DatabaseConfig::at(dir.path().join("meteorcloud.db")).with_max_connections(4);
    let pool = create_pool(&config).expect("Failed to create pool");
    (dir, Arc::new(pool))
}

fn account_service(pool: &Arc<ConnectionPool>) -> AccountService {
    AccountService::new(
        Arc::new(SqliteUserStore::new(Arc::clone(pool))),
        Arc::new(Argon2PasswordHasher::new()),
    )
}

// ============================================================================
// Account flow
// ============================================================================

mod account_tests {
    use super::*;

    #[tokio::test]
    async fn register_then_login() {
        let (_dir, pool) = create_test_pool();
        let accounts = account_service(&pool);

        let registered = accounts
            .register("alice", "Str0ng!Pass")
            .await
            .expect("register");
        let logged_in = accounts
            .login("alice", "Str0ng!Pass")
            .await
            .expect("login");

        assert_eq!(registered.id(), logged_in.id());
        assert!(logged_in.updated_at() >= registered.updated_at());
    }

    #[tokio::test]
    async fn stored_password_is_hashed() {
        let (_dir, pool) = create_test_pool();
        let accounts = account_service(&pool);
        accounts
            .register("bob", "Str0ng!Pass")
            .await
            .expect("register");

        let store = SqliteUserStore::new(Arc::clone(&pool));
        let user = store
            .find_by_username(&Username::new("bob").expect("valid"))
            .await
            .expect("query")
            .expect("user exists");

        assert_ne!(user.password_hash(), "Str0ng!Pass");
        assert!(user.password_hash().starts_with("$argon2"));
        assert!(!user.salt().is_empty());
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let (_dir, pool) = create_test_pool();
        let accounts = account_service(&pool);
        accounts
            .register("carol", "Str0ng!Pass")
            .await
            .expect("register");

        let err = accounts
            .register("carol", "An0ther!Pass")
            .await
            .expect_err("duplicate");
        assert!(matches!(err, ApplicationError::Conflict(_)));
    }

    #[tokio::test]
    async fn concurrent_duplicate_registration_keeps_one_account() {
        let (_dir, pool) = create_test_pool();
        let accounts = Arc::new(account_service(&pool));

        let a = Arc::clone(&accounts);
        let b = Arc::clone(&accounts);
        let (first, second) = tokio::join!(
            async move { a.register("dave", "Str0ng!Pass").await },
            async move { b.register("dave", "Str0ng!Pass").await },
        );

        let successes = [first.is_ok(), second.is_ok()]
            .iter()
            .filter(|ok| **ok)
            .count();
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let (_dir, pool) = create_test_pool();
        let accounts = account_service(&pool);
        accounts
            .register("erin", "Str0ng!Pass")
            .await
            .expect("register");

        let err = accounts
            .login("erin", "Wr0ng!Pass")
            .await
            .expect_err("wrong password");
        assert!(matches!(err, ApplicationError::NotAuthorized(_)));
    }

    #[tokio::test]
    async fn accounts_survive_a_new_pool() {
        let (dir, pool) = create_test_pool();
        account_service(&pool)
            .register("frank", "Str0ng!Pass")
            .await
            .expect("register");
        drop(pool);

        let config = DatabaseConfig::at(dir.path().join("meteorcloud.db")).with_max_connections(1);
        let reopened = Arc::new(create_pool(&config).expect("reopen"));
        assert!(
            account_service(&reopened)
                .login("frank", "Str0ng!Pass")
                .await
                .is_ok()
        );
    }
}

// ============================================================================
// Weather history
// ============================================================================

mod history_tests {
    use super::*;

    #[tokio::test]
    async fn latest_record_across_connections() {
        let (_dir, pool) = create_test_pool();
        let store = SqliteWeatherHistoryStore::new(Arc::clone(&pool));
        let now = Utc::now();

        for (offset, temperature) in [(3, "10°C"), (1, "14°C"), (2, "12°C")] {
            let record = WeatherRecord::restore(
                "Berlin".to_string(),
                temperature.to_string(),
                "few clouds".to_string(),
                now - Duration::minutes(offset),
            );
            store.record(&record).await.expect("record");
        }

        let latest = store
            .latest_for_city(&PlaceQuery::new("berlin").expect("valid"))
            .await
            .expect("query")
            .expect("present");
        assert_eq!(latest.temperature(), "14°C");
    }
}
