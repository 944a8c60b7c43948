/**
 * Health Probes
 *
 * - `GET /api/health` - liveness, never touches the database
 * - `GET /api/db-check` - readiness, counts users
 */

use axum::{extract::State, response::Json};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::auth::users::count_users;
use crate::backend::error::BackendResult;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbCheckResponse {
    pub users_count: i64,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn db_check(State(pool): State<SqlitePool>) -> BackendResult<Json<DbCheckResponse>> {
    let users_count = count_users(&pool).await?;
    Ok(Json(DbCheckResponse { users_count }))
}
