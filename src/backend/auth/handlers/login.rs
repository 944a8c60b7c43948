/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by username
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info
 *
 * # Security
 *
 * - Unknown usernames and wrong passwords both return 401 "Invalid credentials"
 * - User passwords and hashes are never returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::CredentialsPayload;
use crate::backend::auth::handlers::CREDENTIALS_REQUIRED;
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::state::AppState;
use crate::shared::LoginResponse;

/// Message returned for any failed login
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing or empty username or password
/// * `401 Unauthorized` - Unknown user or incorrect password
/// * `500 Internal Server Error` - Database, hashing or token failure
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "user": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "username": "testuser"
///   }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsPayload>, JsonRejection>,
) -> BackendResult<Json<LoginResponse>> {
    let Json(payload) = payload?;
    let (username, password) = payload.into_parts().ok_or_else(|| {
        tracing::warn!("Login rejected: missing credentials");
        BackendError::validation(CREDENTIALS_REQUIRED)
    })?;

    tracing::info!("Login request for: {}", username);

    let user = get_user_by_username(&state.db_pool, &username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", username);
            BackendError::unauthorized(INVALID_CREDENTIALS)
        })?;

    if !verify_password(&password, &user.password_hash).await? {
        tracing::warn!("Invalid password for user: {}", username);
        return Err(BackendError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = create_token(user.id, &state.auth)?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(LoginResponse {
        token,
        user: user.to_summary(),
    }))
}
