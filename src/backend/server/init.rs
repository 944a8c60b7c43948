/**
 * Server Initialization
 *
 * This module wires configuration, the database pool and the router into a
 * ready-to-serve Axum application.
 *
 * # Initialization Process
 *
 * 1. Open the connection pool and run migrations
 * 2. Build the application state
 * 3. Create the router with all routes and middleware
 *
 * A database failure aborts startup: every endpoint except the health probe
 * needs the store.
 */

use axum::Router;

use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns an error when the database cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing Number Talk backend server");

    let db_pool = load_database(&config.database_url).await?;
    let app_state = AppState::new(db_pool, config.auth.clone());

    let app = create_router(app_state);
    tracing::info!("Router configured");

    Ok(app)
}
