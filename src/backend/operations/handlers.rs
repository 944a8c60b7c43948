/**
 * Operation Handler
 *
 * `POST /api/operations` (authenticated) appends one node to a thread's
 * calculation tree.
 *
 * # Process
 *
 * 1. Validate `threadId`, `rightOperand` and `operation` in that order
 * 2. Resolve the thread (404 when unknown or malformed)
 * 3. Resolve the base value: the parent node's result, or the thread seed
 * 4. Reject division by zero and non-finite results
 * 5. Persist the node with the authenticated user as author
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::operations::db::{create_operation as insert_operation, get_operation, NewOperationRecord};
use crate::backend::server::state::AppState;
use crate::backend::threads::{db::get_thread, resolve_thread_id, THREAD_NOT_FOUND};
use crate::shared::arithmetic::INVALID_OPERATION_MESSAGE;
use crate::shared::{compute_result, OperationKind, OperationNode};

pub const THREAD_ID_REQUIRED: &str = "threadId is required";
pub const RIGHT_OPERAND_NOT_A_NUMBER: &str = "rightOperand must be a number";
pub const INVALID_PARENT: &str = "Invalid parentId for this thread";
pub const DIVISION_BY_ZERO: &str = "Division by zero is not allowed";
pub const RESULT_NOT_FINITE: &str = "result is not a finite number";

/// Body of `POST /api/operations`
///
/// Every field is kept untyped so each malformed field gets its own message.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOperationPayload {
    #[serde(default)]
    pub thread_id: Option<Value>,
    #[serde(default)]
    pub parent_id: Option<Value>,
    #[serde(default)]
    pub operation: Option<Value>,
    #[serde(default)]
    pub right_operand: Option<Value>,
}

/// Payload fields that passed the shape checks
#[derive(Debug, PartialEq)]
struct ValidatedOperation {
    thread_id: Uuid,
    parent_id: Option<Value>,
    operation: OperationKind,
    right_operand: f64,
}

impl CreateOperationPayload {
    /// Field checks that need no database access
    fn validate(self) -> Result<ValidatedOperation, BackendError> {
        let raw_thread_id = match &self.thread_id {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            None | Some(Value::Null) => return Err(BackendError::validation(THREAD_ID_REQUIRED)),
            Some(Value::String(_)) => return Err(BackendError::validation(THREAD_ID_REQUIRED)),
            Some(other) => other.to_string(),
        };

        let right_operand = self
            .right_operand
            .as_ref()
            .and_then(Value::as_f64)
            .ok_or_else(|| BackendError::validation(RIGHT_OPERAND_NOT_A_NUMBER))?;

        let operation = match &self.operation {
            Some(Value::String(op)) => op.parse::<OperationKind>()?,
            _ => return Err(BackendError::validation(INVALID_OPERATION_MESSAGE)),
        };

        let thread_id = resolve_thread_id(&raw_thread_id)?;

        Ok(ValidatedOperation {
            thread_id,
            parent_id: self.parent_id,
            operation,
            right_operand,
        })
    }
}

/// Interpret `parentId`: absent or any falsy value (`null`, `""`, `false`,
/// `0`) means the thread seed
fn parse_parent_id(raw: Option<Value>) -> Result<Option<Uuid>, BackendError> {
    match raw {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(None),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(Value::String(id)) if id.is_empty() => Ok(None),
        Some(Value::String(id)) => Uuid::parse_str(&id)
            .map(Some)
            .map_err(|_| BackendError::validation(INVALID_PARENT)),
        Some(_) => Err(BackendError::validation(INVALID_PARENT)),
    }
}

/// Evaluate the node, refusing division by zero and overflow
fn evaluate(base: f64, operation: OperationKind, right_operand: f64) -> Result<f64, BackendError> {
    if operation == OperationKind::Div && right_operand == 0.0 {
        return Err(BackendError::validation(DIVISION_BY_ZERO));
    }

    let result = compute_result(base, operation, right_operand);
    if !result.is_finite() {
        return Err(BackendError::validation(RESULT_NOT_FINITE));
    }
    Ok(result)
}

/// Create an operation node
///
/// # Errors
///
/// * `400 Bad Request` - invalid field, foreign or unknown parent, division by
///   zero, non-finite result
/// * `401 Unauthorized` - rejected by the auth middleware
/// * `404 Not Found` - unknown or malformed thread id
///
/// # Example Request
///
/// ```json
/// {"threadId": "…", "parentId": null, "operation": "ADD", "rightOperand": 5}
/// ```
pub async fn create_operation(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: Result<Json<CreateOperationPayload>, JsonRejection>,
) -> BackendResult<(StatusCode, Json<OperationNode>)> {
    let Json(payload) = payload?;
    let request = payload.validate().inspect_err(|e| {
        tracing::warn!("Operation rejected: {}", e);
    })?;

    let thread = get_thread(&state.db_pool, request.thread_id)
        .await?
        .ok_or_else(|| BackendError::not_found(THREAD_NOT_FOUND))?;

    let parent_id = parse_parent_id(request.parent_id)?;
    let base = match parent_id {
        Some(parent_id) => {
            let parent = get_operation(&state.db_pool, parent_id)
                .await?
                .filter(|parent| parent.thread_id == thread.id)
                .ok_or_else(|| {
                    tracing::warn!("Parent {} does not belong to thread {}", parent_id, thread.id);
                    BackendError::validation(INVALID_PARENT)
                })?;
            parent.result
        }
        None => thread.value,
    };

    let result = evaluate(base, request.operation, request.right_operand)?;

    let node = insert_operation(
        &state.db_pool,
        NewOperationRecord {
            thread_id: thread.id,
            parent_id,
            operation: request.operation,
            right_operand: request.right_operand,
            result,
            author_id: user.user_id,
        },
    )
    .await?;

    tracing::info!(
        "Operation created: {} {} {} = {} on thread {}",
        base,
        node.operation.symbol(),
        node.right_operand,
        node.result,
        node.thread_id
    );

    Ok((StatusCode::CREATED, Json(node)))
}
