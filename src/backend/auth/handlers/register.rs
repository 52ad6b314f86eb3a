/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Parse the JSON body
 * 2. Validate username, email and password (nothing is stored on failure)
 * 3. Create the user and its credential in one transaction
 * 4. Return the created user with 201
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;

/// Registration handler
///
/// # Arguments
///
/// * `State(auth)` - Auth service
/// * `payload` - Registration request, or the reason it could not be parsed
///
/// # Returns
///
/// `201 Created` with the user (id, username, email, created_at)
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or a field failed validation
/// * `409 Conflict` - Email or username already registered
/// * `500 Internal Server Error` - Database or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "Aa1!aaaa"
/// }
/// ```
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), BackendError> {
    let Json(request) = payload.map_err(|e| BackendError::invalid_body(e.body_text()))?;

    let user = auth
        .register(&request.username, &request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
