//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request payloads
//! ├── register.rs  - User registration handler
//! └── login.rs     - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - User authentication

/// Request payloads
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Message returned when either credential is missing or empty
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";

pub use types::CredentialsPayload;
pub use register::register;
pub use login::login;
