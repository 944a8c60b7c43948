/**
 * Thread Handlers
 *
 * - `GET /api/threads` - public, newest first
 * - `POST /api/threads` - authenticated, `{value}` seed number
 * - `GET /api/threads/{id}/tree` - public, thread plus all operation nodes
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::operations::db::list_operations;
use crate::backend::server::state::AppState;
use crate::backend::threads::{db, resolve_thread_id, THREAD_NOT_FOUND};
use crate::shared::{ThreadSummary, ThreadTree};

/// Message returned when the seed value is absent or not numeric
pub const VALUE_NOT_A_NUMBER: &str = "value must be a number";

/// Body of `POST /api/threads`
///
/// `value` is kept untyped so that a string or null reaches the handler and
/// gets the documented message.
#[derive(Debug, Deserialize)]
pub struct CreateThreadPayload {
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

/// List all threads
pub async fn list_threads(State(state): State<AppState>) -> BackendResult<Json<Vec<ThreadSummary>>> {
    let threads = db::list_threads(&state.db_pool).await?;
    tracing::debug!("Listing {} threads", threads.len());
    Ok(Json(threads))
}

/// Create a thread owned by the authenticated user
///
/// # Errors
///
/// * `400 Bad Request` - `value` missing or not a number
/// * `401 Unauthorized` - rejected by the auth middleware
pub async fn create_thread(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateThreadPayload>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<ThreadSummary>)> {
    let Json(payload) = payload?;
    let value = payload
        .value
        .as_ref()
        .and_then(serde_json::Value::as_f64)
        .ok_or_else(|| {
            tracing::warn!("Thread rejected: value is not a number");
            BackendError::validation(VALUE_NOT_A_NUMBER)
        })?;

    let thread = db::create_thread(&state.db_pool, value, user.user_id).await?;
    tracing::info!("Thread created: {} (value {}) by {}", thread.id, thread.value, user.user_id);

    Ok((StatusCode::CREATED, Json(thread)))
}

/// Fetch a thread with its whole calculation tree
///
/// Nodes are returned flat, oldest first; clients rebuild the hierarchy from
/// `parentId`.
///
/// # Errors
///
/// * `404 Not Found` - unknown or malformed thread id
pub async fn get_thread_tree(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> BackendResult<Json<ThreadTree>> {
    let thread_id = resolve_thread_id(&id)?;

    let thread = db::get_thread(&state.db_pool, thread_id)
        .await?
        .ok_or_else(|| BackendError::not_found(THREAD_NOT_FOUND))?;
    let operations = list_operations(&state.db_pool, thread_id).await?;

    Ok(Json(ThreadTree { thread, operations }))
}
