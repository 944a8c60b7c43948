//! Backend Module
//!
//! This module contains all server-side code for Number Talk: an Axum HTTP
//! API where users post seed numbers (threads) and reply to them with
//! arithmetic operations that form a calculation tree.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, database pool, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, password hashing, JWT tokens, register/login handlers
//! - **`middleware`** - Bearer token verification
//! - **`threads`** - Thread queries and handlers, tree retrieval
//! - **`operations`** - Operation node queries and creation
//! - **`health`** - Liveness and database probes
//! - **`error`** - Backend error type and its JSON response
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── threads/        - Threads
//! ├── operations/     - Operation nodes
//! ├── health.rs       - Probes
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` carries the SQLite pool and the auth settings. All domain
//! data lives in the database; handlers keep nothing between requests.
//!
//! # Error Handling
//!
//! Handlers return `BackendResult<T>`. `BackendError` renders as
//! `{"message": ..., "status": ...}` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Threads and calculation trees
pub mod threads;

/// Operation nodes
pub mod operations;

/// Health probes
pub mod health;

pub use error::{BackendError, BackendResult};
pub use routes::create_router;
pub use server::create_app;
