//! Authentication API integration tests
//!
//! Tests for registration, login, logout and the identify stage, driven
//! through the full router.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::assert_contains;
use crate::common::{
    cookie_header, count_rows, create_test_server, create_test_user, create_unique_test_user, login,
    session_token, TEST_PASSWORD,
};

#[tokio::test]
async fn test_register_login_logout_flow() {
    let (server, state) = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "Aa1!aaaa"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let user: Value = response.json();
    assert_eq!(user["username"], "alice");
    assert_eq!(user["email"], "alice@x.com");
    assert!(user["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(user.get("password").is_none());

    let response = login(&server, "alice@x.com", "Aa1!aaaa").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let set_cookie = response.header(header::SET_COOKIE).to_str().unwrap().to_string();
    assert_contains!(set_cookie, "HttpOnly");
    assert_contains!(set_cookie, "SameSite=Strict");
    assert_contains!(set_cookie, "Path=/");
    let token = session_token(&set_cookie).expect("session cookie not set");

    let body: Value = response.json();
    assert_eq!(body["session_id"], token.as_str());
    assert_eq!(body["user"]["username"], "alice");

    let response = server.get("/").add_header(header::COOKIE, cookie_header(&token)).await;
    response.assert_text("Hello alice");

    let response = server
        .post("/api/auth/logout")
        .add_header(header::COOKIE, cookie_header(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let cleared = response.header(header::SET_COOKIE).to_str().unwrap().to_string();
    assert_eq!(session_token(&cleared).as_deref(), Some(""));
    assert_contains!(cleared, "Max-Age=0");
    assert_eq!(count_rows(&state.db_pool, "sessions").await, 0);

    // The old cookie is now anonymous, not an error
    let response = server.get("/").add_header(header::COOKIE, cookie_header(&token)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.assert_text("User is not logged in");
}

#[tokio::test]
async fn test_weak_password_creates_nothing() {
    let (server, state) = create_test_server().await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "username": "alice",
            "email": "alice@x.com",
            "password": "password"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert_contains!(body["error"].as_str().unwrap(), "Password");
    assert_eq!(count_rows(&state.db_pool, "user").await, 0);
    assert_eq!(count_rows(&state.db_pool, "user_auth").await, 0);
}

#[tokio::test]
async fn test_missing_register_fields() {
    let (server, _) = create_test_server().await;
    let response = server.post("/api/auth/register").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let (server, state) = create_test_server().await;
    create_test_user(&state, "alice", "alice@x.com").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "bob", "email": "ALICE@x.com", "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Email is already taken");

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "username": "alice", "email": "bob@x.com", "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: Value = response.json();
    assert_eq!(body["error"], "Username is already taken");

    assert_eq!(count_rows(&state.db_pool, "user").await, 1);
}

#[tokio::test]
async fn test_login_failures_look_the_same() {
    let (server, state) = create_test_server().await;
    let user = create_unique_test_user(&state).await;

    let wrong_password = login(&server, &user.email, "Aa1!wrong").await;
    let unknown_email = login(&server, "nobody@example.com", &user.password).await;
    let malformed_email = login(&server, "nobody", &user.password).await;

    for response in [&wrong_password, &unknown_email, &malformed_email] {
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        assert!(response.maybe_header(header::SET_COOKIE).is_none());
    }

    let first: Value = wrong_password.json();
    assert_eq!(first, unknown_email.json::<Value>());
    assert_eq!(first, malformed_email.json::<Value>());
    assert_eq!(first["error"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (server, _) = create_test_server().await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@x.com" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body() {
    let (server, _) = create_test_server().await;

    let response = server.post("/api/auth/login").text("{not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_second_login_invalidates_first() {
    let (server, state) = create_test_server().await;
    let user = create_unique_test_user(&state).await;

    let first: Value = login(&server, &user.email, &user.password).await.json();
    let second: Value = login(&server, &user.email, &user.password).await.json();
    let first_token = first["session_id"].as_str().unwrap();
    let second_token = second["session_id"].as_str().unwrap();
    assert_ne!(first_token, second_token);

    let response = server.get("/").add_header(header::COOKIE, cookie_header(first_token)).await;
    response.assert_text("User is not logged in");

    let response = server.get("/").add_header(header::COOKIE, cookie_header(second_token)).await;
    response.assert_text(format!("Hello {}", user.user.username));

    assert_eq!(count_rows(&state.db_pool, "sessions").await, 1);
}

#[tokio::test]
async fn test_logout_requires_session() {
    let (server, _) = create_test_server().await;

    let response = server.post("/api/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = server
        .post("/api/auth/logout")
        .add_header(header::COOKIE, cookie_header("stale"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["error"], "Unauthorized");
}
