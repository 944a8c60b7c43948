//! egui Native Desktop App Module
//!
//! This module provides the Number Talk desktop client using egui/eframe.
//! It talks to the Axum backend over its REST API.
//!
//! # Architecture
//!
//! - **`config`** - Server URL configuration
//! - **`session`** - Saved login session (token plus user)
//! - **`api`** - Blocking REST client
//! - **`auth`** - Authentication state and form validation
//! - **`state`** - Central UI state, background requests, fetch states
//! - **`views`** - Top bar, login form, thread list, calculation tree
//! - **`theme`** - Colors
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Application entry point (binary)
//! ├── config.rs       - Configuration management
//! ├── session.rs      - Session persistence
//! ├── api.rs          - REST client
//! ├── auth.rs         - Authentication state
//! ├── state/          - Application state
//! ├── views/          - UI rendering
//! └── theme/          - Colors
//! ```
//!
//! # Example
//!
//! ```text
//! CLIENT_API_URL=http://127.0.0.1:4000 cargo run --bin number_talk_app
//! ```

pub mod config;
pub mod session;
pub mod api;
pub mod auth;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use api::{ApiClient, ApiError};
pub use auth::AuthState;
pub use config::Config;
pub use session::{Session, SessionError, SessionStore};
pub use state::{AppState, LoadState};
