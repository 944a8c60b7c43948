//! Shared Error Types
//!
//! This module defines the error type shared between the desktop client and
//! the backend: a value that travels over the wire in both directions was
//! outside its allowed domain.
//!
//! # Usage
//!
//! ```rust
//! use number_talk::shared::error::SharedError;
//!
//! let error = SharedError::validation("operation", "operation must be ADD | SUB | MUL | DIV");
//! assert_eq!(error.field(), Some("operation"));
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use thiserror::Error;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field that failed validation
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::ValidationError { field, .. } => Some(field),
        }
    }

    /// The bare message, without the prefix used by `Display`
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("rightOperand", "rightOperand must be a number");
        assert_eq!(error.field(), Some("rightOperand"));
        assert_eq!(error.message(), "rightOperand must be a number");
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("value", "value must be a number");
        let display = format!("{}", error);
        assert!(display.contains("Validation error in field 'value'"));
        assert!(display.contains("value must be a number"));
    }
}
