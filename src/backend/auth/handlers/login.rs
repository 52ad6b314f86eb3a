/**
 * Login Handler
 *
 * This module implements the login handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Parse the JSON body
 * 2. Verify credentials through the auth service
 * 3. Replace any previous session of the user with a new one
 * 4. Set the `session_id` cookie and return the user and token
 *
 * # Security
 *
 * - Unknown email, wrong password and malformed email share one 401 response
 * - The cookie is http-only and same-site strict, and secure when the
 *   server is reached over https
 * - The cookie expires together with the session
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::OffsetDateTime;

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::sessions::Session;
use crate::backend::error::BackendError;
use crate::backend::middleware::{ClientAddr, SESSION_COOKIE};
use crate::backend::server::state::AppState;

/// Build the session cookie for a freshly created session
pub fn session_cookie(session: &Session, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, session.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .expires(OffsetDateTime::from_unix_timestamp(session.expires_at.timestamp()).ok())
        .build()
}

/// Login handler
///
/// # Arguments
///
/// * `State(state)` - Application state (auth service and cookie settings)
/// * `ClientAddr(client_ip)` - Peer address recorded on the session
/// * `jar` - Request cookies; the new session cookie is added to it
/// * `payload` - Login request, or the reason it could not be parsed
///
/// # Returns
///
/// `200 OK` with `{user, session_id}` and a `Set-Cookie` header
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, missing email or password
/// * `401 Unauthorized` - Invalid credentials or malformed email
/// * `500 Internal Server Error` - Database failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "alice@example.com",
///   "password": "Aa1!aaaa"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    ClientAddr(client_ip): ClientAddr,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<LoginResponse>), BackendError> {
    let Json(request) = payload.map_err(|e| BackendError::invalid_body(e.body_text()))?;

    let (user, session) = state
        .auth
        .login(&request.email, &request.password, &client_ip)
        .await?;

    let jar = jar.add(session_cookie(&session, state.config.secure_cookies));

    Ok((
        jar,
        Json(LoginResponse {
            user,
            session_id: session.token,
        }),
    ))
}
