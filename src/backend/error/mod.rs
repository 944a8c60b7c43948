//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Status Taxonomy
//!
//! Validation errors map to 400, authentication errors to 401, unknown
//! resources to 404, duplicate usernames to 409, and every other failure to
//! 500 with a generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, INTERNAL_ERROR_MESSAGE};

/// Result type used by handlers and database helpers
pub type BackendResult<T> = Result<T, BackendError>;
