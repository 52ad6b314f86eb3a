/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Outermost first:
 * 1. `TraceLayer` - request spans
 * 2. `identify` - attaches the current user, if any, to every request
 */

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::forum::home;
use crate::backend::middleware::identify;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (config, pool, auth service)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/", get(home));

    let router = configure_api_routes(router);

    let router = router.fallback(|| async { (axum::http::StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(from_fn_with_state(app_state.clone(), identify))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
