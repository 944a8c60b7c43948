//! Authentication Module
//!
//! This module handles user registration, login and token management.
//!
//! # Architecture
//!
//! - **`users`** - User data model and database operations
//! - **`password`** - bcrypt hashing off the async executor
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: username and password → user created → public record returned
//! 2. **Login**: username and password → credentials verified → JWT token returned
//! 3. **Write requests**: `Authorization: Bearer <token>` → verified by the auth middleware
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after one day
//! - Invalid credentials return 401 (no information leakage)

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use sessions::{create_token, verify_token, Claims};
