/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `GET /api/health` - Liveness probe
 * - `GET /api/db-check` - Database probe
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/threads` - List threads
 * - `GET /api/threads/{id}/tree` - Thread with its calculation tree
 *
 * ## Authenticated
 * - `POST /api/threads` - Create a thread
 * - `POST /api/operations` - Create an operation node
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::health::{db_check, health};
use crate::backend::middleware::auth_middleware;
use crate::backend::operations::create_operation;
use crate::backend::server::state::AppState;
use crate::backend::threads::{create_thread, get_thread_tree, list_threads};

/// Configure API routes
///
/// Write endpoints live on their own router so `auth_middleware` runs only
/// for them; `GET /api/threads` and `POST /api/threads` share a path and are
/// merged into one method router.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth middleware
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/threads", post(create_thread))
        .route("/api/operations", post(create_operation))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        .route("/api/health", get(health))
        .route("/api/db-check", get(db_check))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/threads", get(list_threads))
        .route("/api/threads/{id}/tree", get(get_thread_tree))
        .merge(protected)
}
