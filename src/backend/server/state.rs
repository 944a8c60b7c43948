/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds only handles: the SQLite connection pool and the auth
 * settings. Request handling is stateless; every piece of domain data lives
 * in the database.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract `State<SqlitePool>`
 * or `State<AuthConfig>` without needing the entire `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::server::config::AuthConfig;

/// Shared handles passed to every handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Token signing and password hashing settings
    pub auth: AuthConfig,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, auth: AuthConfig) -> Self {
        Self { db_pool, auth }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for AuthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
