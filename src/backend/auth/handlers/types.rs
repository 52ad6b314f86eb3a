/**
 * Authentication Handler Types
 *
 * Request and response bodies of the authentication endpoints. Missing
 * request fields deserialize to empty strings so they are reported by
 * validation rather than as a malformed body.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct RegisterRequest {
    /// 3-15 chars, alphanumeric + underscore
    pub username: String,
    pub email: String,
    /// Hashed before storage, never logged
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default, Clone)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
///
/// The token is also set as the `session_id` cookie.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub user: User,
    pub session_id: String,
}
