/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Require a non-empty username and password
 * 2. Check if the username is already taken
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Return the public user record
 *
 * Registration does not log the user in; clients call login afterwards.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::CredentialsPayload;
use crate::backend::auth::handlers::CREDENTIALS_REQUIRED;
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{create_user, get_user_by_username, is_unique_violation};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::state::AppState;
use crate::shared::RegisteredUser;

/// Message returned when the username exists
pub const USERNAME_TAKEN: &str = "Username already taken";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing or empty username or password
/// * `409 Conflict` - Username already taken
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "testuser", "password": "secret123"}
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "username": "testuser",
///   "createdAt": "2025-01-01T12:00:00Z"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsPayload>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<RegisteredUser>)> {
    let Json(payload) = payload?;
    let (username, password) = payload.into_parts().ok_or_else(|| {
        tracing::warn!("Registration rejected: missing credentials");
        BackendError::validation(CREDENTIALS_REQUIRED)
    })?;

    tracing::info!("Register request for username: {}", username);

    if get_user_by_username(&state.db_pool, &username).await?.is_some() {
        tracing::warn!("Username already exists: {}", username);
        return Err(BackendError::conflict(USERNAME_TAKEN));
    }

    let password_hash = hash_password(&password, state.auth.bcrypt_cost).await?;

    let user = match create_user(&state.db_pool, &username, &password_hash).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("Username taken concurrently: {}", username);
            return Err(BackendError::conflict(USERNAME_TAKEN));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!("User registered successfully: {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(user.to_registered())))
}
