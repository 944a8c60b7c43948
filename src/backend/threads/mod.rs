//! Threads Module
//!
//! A thread is a seed number posted by a user. Operation nodes hang off a
//! thread (or off each other) and form its calculation tree.
//!
//! - **`db`** - thread queries, always joined with the author
//! - **`handlers`** - list, create and tree endpoints

pub mod db;
pub mod handlers;

use uuid::Uuid;

use crate::backend::error::BackendError;

/// Message returned for unknown or malformed thread ids
pub const THREAD_NOT_FOUND: &str = "Thread not found";

/// Parse a thread id from a path or body
///
/// A malformed id cannot name an existing thread, so it is reported as 404.
pub fn resolve_thread_id(raw: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| {
        tracing::warn!("Malformed thread id: {}", raw);
        BackendError::not_found(THREAD_NOT_FOUND)
    })
}

pub use handlers::{create_thread, get_thread_tree, list_threads};
