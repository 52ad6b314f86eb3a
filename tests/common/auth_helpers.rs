//! Authentication test helpers
//!
//! Provides utilities for creating test users and working with the
//! session cookie in HTTP tests.

use axum_test::{TestResponse, TestServer};
use serde_json::json;
use uuid::Uuid;

use forum::backend::auth::User;
use forum::backend::middleware::SESSION_COOKIE;
use forum::backend::server::AppState;

/// Password that satisfies every strength rule
pub const TEST_PASSWORD: &str = "Aa1!aaaa";

/// Test user credentials
pub struct TestUser {
    pub user: User,
    pub email: String,
    pub password: String,
}

/// Register a user directly through the auth service
pub async fn create_test_user(state: &AppState, username: &str, email: &str) -> TestUser {
    let user = state
        .auth
        .register(username, email, TEST_PASSWORD)
        .await
        .expect("Failed to register test user");
    TestUser {
        user,
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Register a user with a unique username and email
pub async fn create_unique_test_user(state: &AppState) -> TestUser {
    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    let username = format!("u_{}", suffix);
    let email = format!("{}@example.com", username);
    create_test_user(state, &username, &email).await
}

/// POST /api/auth/login
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await
}

/// Value of the `session_id` cookie in a `Set-Cookie` header
pub fn session_token(set_cookie: &str) -> Option<String> {
    let (name, rest) = set_cookie.split_once('=')?;
    if name.trim() != SESSION_COOKIE {
        return None;
    }
    Some(rest.split(';').next().unwrap_or("").to_string())
}

/// `Cookie` request header value carrying a session token
pub fn cookie_header(token: &str) -> String {
    format!("{}={}", SESSION_COOKIE, token)
}
