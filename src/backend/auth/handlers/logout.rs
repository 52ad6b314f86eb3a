/**
 * Logout Handler
 *
 * POST /api/auth/logout. Mounted behind the require-auth layer, so a
 * request without a live session never gets here. The handler itself
 * always succeeds: the session row is deleted if present and the cookie
 * is cleared either way.
 */
use std::sync::Arc;

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::{json, Value};

use crate::backend::auth::service::AuthService;
use crate::backend::middleware::SESSION_COOKIE;

/// Logout handler
///
/// # Returns
///
/// `200 OK` with a removal cookie for `session_id`
pub async fn logout(State(auth): State<Arc<AuthService>>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());

    if let Err(e) = auth.logout(token.as_deref()).await {
        tracing::error!(error = %e, "failed to delete session on logout");
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, Json(json!({ "message": "Logged out" })))
}
