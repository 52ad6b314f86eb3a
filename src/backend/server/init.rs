/**
 * Server Initialization
 *
 * This module builds the Axum application from a [`ServerConfig`].
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool, create the schema, seed categories
 * 2. Build the stores and the auth service into `AppState`
 * 3. Create the router with the identify and trace layers
 */

use axum::Router;

use crate::backend::database;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the database cannot be opened or the schema cannot be
/// created. Unlike optional services, the store is required.
pub async fn create_app(config: ServerConfig) -> Result<Router, sqlx::Error> {
    tracing::info!(database_url = %config.database_url, "initializing forum backend");

    let db_pool = database::initialize(&config.database_url, config.database_max_connections).await?;
    tracing::info!("database ready");

    Ok(build_router(AppState::new(config, db_pool)))
}

/// Build the router over an existing state
pub fn build_router(app_state: AppState) -> Router {
    create_router(app_state)
}
