/**
 * API Routes
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration (public)
 * - `POST /api/auth/login` - User login (public)
 * - `POST /api/auth/logout` - End the session (requires auth)
 *
 * ## Forum
 * - `GET /api/categories` - Forum categories (public)
 */

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout, register};
use crate::backend::forum::list_categories;
use crate::backend::middleware::require_auth;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/logout",
            post(logout).route_layer(from_fn(require_auth)),
        )
        .route("/api/categories", get(list_categories))
}
