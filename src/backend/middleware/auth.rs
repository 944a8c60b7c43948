/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user ID to handlers.
 *
 * # Rejections
 *
 * - Missing header, or one not of the form `Bearer <token>` → 401 "Unauthorized"
 * - Bad signature, malformed or expired token → 401 "Invalid token"
 * - Token whose subject no longer names a user → 401 "Invalid token"
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::sessions::get_user_id_from_token;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Message for a missing or malformed Authorization header
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Message for a token that fails verification
pub const INVALID_TOKEN: &str = "Invalid token";

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts JWT token from Authorization header
/// 2. Verifies the token and parses the user ID from its subject
/// 3. Checks that the user still exists
/// 4. Attaches user data to request extensions for use in handlers
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(&request)?;

    let user_id = get_user_id_from_token(token, &app_state.auth).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized(INVALID_TOKEN)
    })?;

    verify_user_exists(&app_state.db_pool, user_id).await?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Pull the token out of a `Bearer <token>` Authorization header
fn bearer_token(request: &Request) -> Result<&str, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized(UNAUTHORIZED)
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized(UNAUTHORIZED)
    })
}

/// Verify user exists in database
async fn verify_user_exists(pool: &SqlitePool, user_id: Uuid) -> Result<(), BackendError> {
    if get_user_by_id(pool, user_id).await?.is_none() {
        tracing::warn!("Token subject not found in database: {}", user_id);
        return Err(BackendError::unauthorized(INVALID_TOKEN));
    }
    Ok(())
}

/// Axum extractor for authenticated user
///
/// This can be used as a parameter in handlers behind `auth_middleware` to
/// get the user the middleware verified.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized(UNAUTHORIZED)
            })?;

        Ok(AuthUser(user))
    }
}
