/**
 * Operation Node Database Operations
 *
 * The `operation` column stores the wire name (`ADD`, `SUB`, `MUL`, `DIV`)
 * as TEXT and is parsed back into `OperationKind` when rows are read.
 * Rows are ordered by `created_at`, ties broken by insertion order.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::shared::{OperationKind, OperationNode, UserSummary};

const SELECT_OPERATION: &str = r#"
    SELECT o.id, o.thread_id, o.parent_id, o.operation, o.right_operand, o.result,
           o.created_at, u.id AS author_id, u.username AS author_username
    FROM operation_nodes o
    JOIN users u ON u.id = o.author_id
"#;

/// An `operation_nodes` row joined with its author's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OperationRow {
    pub id: Uuid,
    pub thread_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub operation: String,
    pub right_operand: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub author_username: String,
}

impl TryFrom<OperationRow> for OperationNode {
    type Error = BackendError;

    fn try_from(row: OperationRow) -> Result<Self, Self::Error> {
        let operation = row.operation.parse::<OperationKind>().map_err(|_| {
            BackendError::internal(format!(
                "Stored operation node {} has unknown kind {:?}",
                row.id, row.operation
            ))
        })?;

        Ok(OperationNode {
            id: row.id,
            thread_id: row.thread_id,
            parent_id: row.parent_id,
            operation,
            right_operand: row.right_operand,
            result: row.result,
            created_at: row.created_at,
            author: UserSummary {
                id: row.author_id,
                username: row.author_username,
            },
        })
    }
}

/// Values of a node about to be inserted
#[derive(Debug, Clone)]
pub struct NewOperationRecord {
    pub thread_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub operation: OperationKind,
    pub right_operand: f64,
    pub result: f64,
    pub author_id: Uuid,
}

/// Insert an operation node and return it with author info
pub async fn create_operation(
    pool: &SqlitePool,
    record: NewOperationRecord,
) -> Result<OperationNode, BackendError> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO operation_nodes
            (id, thread_id, parent_id, operation, right_operand, result, author_id, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        "#,
    )
    .bind(id)
    .bind(record.thread_id)
    .bind(record.parent_id)
    .bind(record.operation.as_str())
    .bind(record.right_operand)
    .bind(record.result)
    .bind(record.author_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    get_operation(pool, id)
        .await?
        .ok_or_else(|| BackendError::internal(format!("Inserted operation node {} not found", id)))
}

/// Get one operation node by ID
pub async fn get_operation(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<OperationNode>, BackendError> {
    let query = format!("{} WHERE o.id = ?1", SELECT_OPERATION);
    let row = sqlx::query_as::<_, OperationRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.map(OperationNode::try_from).transpose()
}

/// All operation nodes of a thread, oldest first
pub async fn list_operations(
    pool: &SqlitePool,
    thread_id: Uuid,
) -> Result<Vec<OperationNode>, BackendError> {
    let query = format!(
        "{} WHERE o.thread_id = ?1 ORDER BY julianday(o.created_at) ASC, o.rowid ASC",
        SELECT_OPERATION
    );
    let rows = sqlx::query_as::<_, OperationRow>(&query)
        .bind(thread_id)
        .fetch_all(pool)
        .await?;

    rows.into_iter().map(OperationNode::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::server::config::load_database;
    use crate::backend::threads::db::create_thread;

    fn record(thread_id: Uuid, parent_id: Option<Uuid>, author_id: Uuid, result: f64) -> NewOperationRecord {
        NewOperationRecord {
            thread_id,
            parent_id,
            operation: OperationKind::Add,
            right_operand: 1.0,
            result,
            author_id,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_operations() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let user = create_user(&pool, "alice", "hash").await.unwrap();
        let thread = create_thread(&pool, 10.0, user.id).await.unwrap();

        let root = create_operation(&pool, record(thread.id, None, user.id, 11.0)).await.unwrap();
        let child = create_operation(&pool, record(thread.id, Some(root.id), user.id, 12.0))
            .await
            .unwrap();

        assert_eq!(root.operation, OperationKind::Add);
        assert_eq!(root.author.username, "alice");
        assert_eq!(child.parent_id, Some(root.id));

        let listed = list_operations(&pool, thread.id).await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![root.id, child.id]);
    }

    #[tokio::test]
    async fn test_get_unknown_operation() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        assert!(get_operation(&pool, Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_is_scoped_to_thread() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let user = create_user(&pool, "alice", "hash").await.unwrap();
        let a = create_thread(&pool, 1.0, user.id).await.unwrap();
        let b = create_thread(&pool, 2.0, user.id).await.unwrap();

        create_operation(&pool, record(a.id, None, user.id, 2.0)).await.unwrap();

        assert_eq!(list_operations(&pool, a.id).await.unwrap().len(), 1);
        assert!(list_operations(&pool, b.id).await.unwrap().is_empty());
    }
}
