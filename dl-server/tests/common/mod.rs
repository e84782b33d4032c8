#![allow(dead_code)]

//! Test infrastructure for dl-server API tests

use dl_auth::{JwtValidator, TokenIssuer};
use dl_core::User;
use dl_db::UserRepository;
use dl_server::api::state::AppState;

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/dl-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        token_issuer: Arc::new(TokenIssuer::with_hs256(TEST_SECRET, 24)),
        jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
    }
}

/// Insert a user directly and issue a session token for them.
///
/// The stored password hash is a placeholder; tests that exercise login go
/// through the registration endpoint instead.
pub async fn create_test_user(state: &AppState, name: &str, email: &str) -> (Uuid, String) {
    let user = User::new(
        name.to_string(),
        email.to_string(),
        "placeholder-hash".to_string(),
    );
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");

    let token = state
        .token_issuer
        .issue(user.id)
        .expect("Failed to issue test token");

    (user.id, token)
}
