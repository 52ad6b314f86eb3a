/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The server configuration, built once at startup
 * - The SQLite connection pool
 * - The auth service (credential store + session store)
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers and middleware to extract
 * only the part they use:
 *
 * ```rust,ignore
 * async fn handler(State(auth): State<Arc<AuthService>>) { /* ... */ }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::{AuthService, PasswordHasher, SessionRepository, UserRepository};
use crate::backend::server::config::ServerConfig;

/// Application state
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Registration, login and session handling
    pub auth: Arc<AuthService>,
}

impl AppState {
    /// Wire the stores and the auth service over `db_pool`
    pub fn new(config: ServerConfig, db_pool: SqlitePool) -> Self {
        let hasher = PasswordHasher::new(config.bcrypt_cost);
        let users = UserRepository::new(db_pool.clone(), hasher);
        let sessions = SessionRepository::new(db_pool.clone(), config.session_ttl());

        Self {
            config: Arc::new(config),
            db_pool,
            auth: Arc::new(AuthService::new(users, sessions)),
        }
    }
}

impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

/// State over a fresh in-memory database, with a cheap bcrypt cost
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let mut config = ServerConfig::new("http://localhost:8080");
    config.bcrypt_cost = 4;
    AppState::new(config, crate::backend::database::test_pool().await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_state_uses_config() {
        let state = test_state().await;
        assert_eq!(state.auth.sessions().ttl(), chrono::Duration::hours(24));

        let pool = SqlitePool::from_ref(&state);
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
