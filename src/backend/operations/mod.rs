//! Operations Module
//!
//! Operation nodes apply one arithmetic step to a base value: the thread's
//! seed for root nodes, the parent node's result otherwise. A node's result
//! is computed once at creation and stored.
//!
//! - **`db`** - node queries, joined with the author
//! - **`handlers`** - `POST /api/operations`

pub mod db;
pub mod handlers;

pub use handlers::create_operation;
