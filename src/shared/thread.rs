//! Thread and operation wire types
//!
//! JSON shapes of threads, operation nodes and calculation trees as served by
//! `/api/threads` and `/api/operations`. Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::arithmetic::OperationKind;
use crate::shared::auth::UserSummary;

/// A thread: a seed value started by a user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThreadSummary {
    pub id: Uuid,
    pub value: f64,
    pub created_at: DateTime<Utc>,
    pub author: UserSummary,
}

/// One arithmetic step applied to a thread's seed or to another node's result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationNode {
    pub id: Uuid,
    pub thread_id: Uuid,
    /// `None` means the operation applies to the thread's seed value
    pub parent_id: Option<Uuid>,
    pub operation: OperationKind,
    pub right_operand: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub author: UserSummary,
}

/// A thread together with every operation node it owns, oldest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadTree {
    pub thread: ThreadSummary,
    pub operations: Vec<OperationNode>,
}

/// Body of `POST /api/threads`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewThread {
    pub value: f64,
}

/// Body of `POST /api/operations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewOperation {
    pub thread_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub operation: OperationKind,
    pub right_operand: f64,
}
