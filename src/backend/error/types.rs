/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 * Each variant maps to one HTTP status code and can be converted into a
 * JSON error response.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - Missing or malformed input (400)
 * - `Unauthorized` - Missing/invalid/expired token, bad credentials (401)
 * - `NotFound` - Unknown thread or route (404)
 * - `Conflict` - Duplicate username (409)
 *
 * ## Server Errors
 *
 * Database, migration, hashing, token signing and configuration failures
 * all map to 500. Their detail is logged and never sent to the client.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::{ConfigError, SharedError};

/// Message sent to the client for every 500 response
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use number_talk::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::validation("value must be a number");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
///
/// let err = BackendError::not_found("Thread not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or malformed request input
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Authentication failure
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// A referenced resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// The request conflicts with existing state
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure with a detail that stays server-side
    #[error("Internal error: {message}")]
    Internal {
        /// Detail for the server log
        message: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database query failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Password hashing or verification failure
    #[error("Password hashing error: {0}")]
    Password(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Invalid server configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BackendError {
    /// Create a new validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new authentication error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a new not-found error (404)
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new internal error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `SharedError` - 400 Bad Request
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Internal { .. }
            | Self::Database(_)
            | Self::Migration(_)
            | Self::Password(_)
            | Self::Token(_)
            | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    ///
    /// Server errors collapse to [`INTERNAL_ERROR_MESSAGE`].
    pub fn message(&self) -> String {
        if self.status_code().is_server_error() {
            return INTERNAL_ERROR_MESSAGE.to_string();
        }
        match self {
            Self::Validation { message }
            | Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Conflict { message } => message.clone(),
            Self::SharedError(err) => err.message().to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = BackendError::validation("Invalid request");
        match error {
            BackendError::Validation { ref message } => {
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected Validation"),
        }
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(BackendError::unauthorized("x").status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(BackendError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BackendError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(BackendError::internal("x").status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            BackendError::from(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_shared_error() {
        let shared_error = SharedError::validation("operation", "operation must be ADD | SUB | MUL | DIV");
        let backend_error: BackendError = shared_error.into();

        assert_eq!(backend_error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(backend_error.message(), "operation must be ADD | SUB | MUL | DIV");
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let error = BackendError::internal("connection refused on 10.0.0.3");
        assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn test_client_error_message() {
        let error = BackendError::conflict("Username already taken");
        assert_eq!(error.message(), "Username already taken");
    }
}
