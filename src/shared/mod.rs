//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the desktop client and the backend. These types are used for
//! serialization and communication over the REST API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code:
//!
//! - **`arithmetic`** - Operation kinds and the pure evaluator
//! - **`auth`** - Register/login bodies
//! - **`thread`** - Threads, operation nodes and trees as JSON
//! - **`tree`** - Parent-id index used to render a calculation tree
//! - **`error`** - Errors both sides can raise
//! - **`config`** - Configuration types and errors

/// Operation kinds and the arithmetic evaluator
pub mod arithmetic;

/// Authentication wire types
pub mod auth;

/// Thread and operation wire types
pub mod thread;

/// Calculation tree reconstruction
pub mod tree;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use arithmetic::{compute_result, OperationKind};
pub use auth::{Credentials, LoginResponse, RegisteredUser, UserSummary};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use thread::{NewOperation, NewThread, OperationNode, ThreadSummary, ThreadTree};
pub use tree::OperationIndex;
