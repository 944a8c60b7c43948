//! Middleware Module
//!
//! This module contains all HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token verification for write endpoints, plus the
//!   `AuthUser` extractor handlers use to read the verified user
//!
//! Request tracing and CORS are tower-http layers applied in `routes::router`.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
