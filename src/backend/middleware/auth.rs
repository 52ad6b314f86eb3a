/**
 * Authentication Middleware
 *
 * Two stages. `identify` wraps every route: it resolves the optional
 * `session_id` cookie into a [`User`] and attaches a [`CurrentUser`] to the
 * request. Any failure along the way (no cookie, unknown or expired token,
 * vanished user, storage error) leaves the request anonymous; it never
 * turns into an error response.
 *
 * `require_auth` wraps protected routes only and rejects requests that
 * reached it anonymous with 401, without running the handler.
 *
 * Handlers read the identity through the [`CurrentUser`] or [`AuthUser`]
 * extractors, or [`current_user`] on a raw request.
 */

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::backend::auth::service::AuthService;
use crate::backend::auth::users::User;
use crate::backend::error::BackendError;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session_id";

/// Identity attached by the identify stage; `None` for anonymous requests
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurrentUser(pub Option<User>);

/// Resolve the session cookie in `headers` to its user
///
/// Returns `None` whenever the request cannot be identified.
pub async fn resolve_identity(auth: &AuthService, headers: &HeaderMap) -> Option<User> {
    let jar = CookieJar::from_headers(headers);
    let token = jar.get(SESSION_COOKIE)?.value().to_string();
    if token.is_empty() {
        return None;
    }

    let session = match auth.sessions().get_by_token(&token).await {
        Ok(session) => session,
        Err(e) if e.is_internal() => {
            tracing::error!(error = %e, "session lookup failed, treating request as anonymous");
            return None;
        }
        Err(e) => {
            tracing::debug!(reason = %e, "session cookie did not resolve");
            return None;
        }
    };

    match auth.users().find_by_id(&session.user_id).await {
        Ok(user) => Some(user),
        Err(e) if e.is_internal() => {
            tracing::error!(error = %e, "user lookup failed, treating request as anonymous");
            None
        }
        Err(e) => {
            tracing::debug!(user_id = %session.user_id, reason = %e, "session owner not found");
            None
        }
    }
}

/// Identify stage
///
/// Always runs the inner service.
pub async fn identify(
    State(auth): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = resolve_identity(&auth, request.headers()).await;
    request.extensions_mut().insert(CurrentUser(user));
    next.run(request).await
}

/// Require-auth stage
///
/// Returns 401 Unauthorized if no user was attached by `identify`.
pub async fn require_auth(request: Request, next: Next) -> Result<Response, BackendError> {
    if current_user(&request).is_none() {
        tracing::debug!(path = %request.uri().path(), "rejected anonymous request");
        return Err(BackendError::Unauthorized);
    }
    Ok(next.run(request).await)
}

/// Extract the identified user from request extensions
pub fn current_user(request: &Request) -> Option<&User> {
    request
        .extensions()
        .get::<CurrentUser>()
        .and_then(|current| current.0.as_ref())
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<CurrentUser>().cloned().unwrap_or_default())
    }
}

/// Axum extractor for an identified user
///
/// Rejects with 401 when the request is anonymous.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .and_then(|current| current.0.clone())
            .map(AuthUser)
            .ok_or(BackendError::Unauthorized)
    }
}
