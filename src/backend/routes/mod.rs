//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers and fallback
//! └── api_routes.rs   - `/api/*` endpoints
//! ```
//!
//! # Route Types
//!
//! - `GET /api/health`, `GET /api/db-check` - probes
//! - `POST /api/auth/register`, `POST /api/auth/login` - authentication
//! - `GET|POST /api/threads`, `GET /api/threads/{id}/tree` - threads
//! - `POST /api/operations` - operation nodes
//!
//! # Example
//!
//! ```rust,no_run
//! use number_talk::backend::routes::create_router;
//! use number_talk::backend::server::{load_database, AppState, AuthConfig};
//!
//! # async fn example() -> Result<(), number_talk::backend::BackendError> {
//! let pool = load_database("sqlite::memory:").await?;
//! let router = create_router(AppState::new(pool, AuthConfig::new("secret")));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
