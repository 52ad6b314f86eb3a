/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the backend. Repository code
 * reports `AuthError`; handlers return `BackendError`, which wraps it and
 * knows the HTTP status for every case.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * Malformed input, reported before storage is touched (400).
 *
 * ## Conflict Errors
 *
 * `EmailTaken` and `UsernameTaken` (409). The client can correct these.
 *
 * ## Authentication Errors
 *
 * `InvalidCredentials` covers both "no such user" and "wrong password" so
 * responses never reveal which accounts exist (401).
 *
 * ## Session Errors
 *
 * `SessionNotFound` and `SessionExpired`. The identify middleware turns these
 * into an anonymous request; they only reach a client from direct callers.
 *
 * ## Infrastructure Errors
 *
 * Database and hashing failures. Logged with detail, returned as an opaque
 * 500.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Errors raised by the credential store, session store and auth service
#[derive(Debug, Error)]
pub enum AuthError {
    /// No user matches the lookup
    #[error("user not found")]
    UserNotFound,

    /// Another user already registered this email (case-insensitive)
    #[error("email is already taken")]
    EmailTaken,

    /// Another user already registered this username
    #[error("username is already taken")]
    UsernameTaken,

    /// Unknown email, wrong password or malformed login email
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No session row for the token
    #[error("session not found")]
    SessionNotFound,

    /// The session existed but was past its expiry; the row has been removed
    #[error("session expired")]
    SessionExpired,

    /// Storage failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl AuthError {
    /// True for errors caused by the infrastructure rather than the caller
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Hashing(_))
    }
}

/// Backend-specific error types
///
/// This enum represents all errors a handler can return. Each variant maps
/// to exactly one HTTP status code.
///
/// # Usage
///
/// ```rust
/// use forum::backend::error::{AuthError, BackendError};
///
/// let err: BackendError = AuthError::EmailTaken.into();
/// assert_eq!(err.status_code().as_u16(), 409);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Field validation failed
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Repository or service failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The request body could not be parsed
    #[error("Invalid request body: {message}")]
    InvalidBody {
        /// Parser message, logged only
        message: String,
    },

    /// The route requires an identified user and none was attached
    #[error("Unauthorized")]
    Unauthorized,
}

impl BackendError {
    /// Create a new invalid body error
    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::InvalidBody {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation`, `InvalidBody` - 400 Bad Request
    /// - `EmailTaken`, `UsernameTaken` - 409 Conflict
    /// - `InvalidCredentials`, session errors, `Unauthorized` - 401 Unauthorized
    /// - `UserNotFound` - 404 Not Found
    /// - `Database`, `Hashing` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Auth(err) => match err {
                AuthError::EmailTaken | AuthError::UsernameTaken => StatusCode::CONFLICT,
                AuthError::InvalidCredentials
                | AuthError::SessionNotFound
                | AuthError::SessionExpired => StatusCode::UNAUTHORIZED,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::Database(_) | AuthError::Hashing(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    /// Get the message returned to the client
    ///
    /// Infrastructure details never leave the server.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.client_message(),
            Self::InvalidBody { .. } => "Invalid request body".to_string(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::Auth(err) => match err {
                AuthError::EmailTaken => "Email is already taken".to_string(),
                AuthError::UsernameTaken => "Username is already taken".to_string(),
                AuthError::InvalidCredentials => "Invalid email or password".to_string(),
                AuthError::SessionNotFound | AuthError::SessionExpired => {
                    "Unauthorized".to_string()
                }
                AuthError::UserNotFound => "User not found".to_string(),
                AuthError::Database(_) | AuthError::Hashing(_) => {
                    "Internal server error".to_string()
                }
            },
        }
    }
}
