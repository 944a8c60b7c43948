//! Theme Module
//!
//! Color constants used by the views.

pub mod colors;

pub use colors::*;
