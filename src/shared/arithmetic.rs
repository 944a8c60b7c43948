//! Arithmetic Evaluator
//!
//! The four operation kinds a node can apply to its base value, and the pure
//! function that evaluates them. Shared by the backend (which computes and
//! stores every node's result) and the desktop client (which renders the
//! kind's symbol and builds requests).
//!
//! The evaluator performs no zero check. Callers reject `DIV` with a zero
//! right operand before evaluating.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Message returned when an operation string is not one of the four kinds
pub const INVALID_OPERATION_MESSAGE: &str = "operation must be ADD | SUB | MUL | DIV";

/// Arithmetic operation applied by an operation node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Add,
    Sub,
    Mul,
    Div,
}

impl OperationKind {
    /// All kinds, in the order the client offers them
    pub const ALL: [OperationKind; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Wire representation (`"ADD"`, `"SUB"`, `"MUL"`, `"DIV"`)
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
        }
    }

    /// Mathematical symbol for display
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "−",
            Self::Mul => "×",
            Self::Div => "÷",
        }
    }

    /// Apply this operation to `base` with `right` as the right operand
    pub fn apply(self, base: f64, right: f64) -> f64 {
        match self {
            Self::Add => base + right,
            Self::Sub => base - right,
            Self::Mul => base * right,
            Self::Div => base / right,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(Self::Add),
            "SUB" => Ok(Self::Sub),
            "MUL" => Ok(Self::Mul),
            "DIV" => Ok(Self::Div),
            _ => Err(SharedError::validation("operation", INVALID_OPERATION_MESSAGE)),
        }
    }
}

/// Evaluate `base ∘ right` for the given operation kind
pub fn compute_result(base: f64, operation: OperationKind, right: f64) -> f64 {
    operation.apply(base, right)
}
