//! Number Talk - Main Library
//!
//! Number Talk is a small social calculator: users post a seed number (a
//! thread) and reply with arithmetic operations. Each operation applies to
//! the thread's seed or to another operation's result, so replies form a
//! calculation tree.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Operation kinds and the arithmetic evaluator
//!   - Auth, thread and operation wire types
//!   - Parent-id tree index
//!   - Error and configuration types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP API with JWT authentication
//!   - SQLite persistence through sqlx
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend module and the server binary
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use number_talk::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Evaluator
//!
//! ```rust
//! use number_talk::shared::{compute_result, OperationKind};
//!
//! assert_eq!(compute_result(10.0, OperationKind::Add, 5.0), 15.0);
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
