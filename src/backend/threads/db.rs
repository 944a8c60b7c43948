/**
 * Thread Database Operations
 *
 * Threads are always read joined with their author so that every response
 * carries `author: {id, username}`.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::{ThreadSummary, UserSummary};

/// A `threads` row joined with its author's username
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ThreadRow {
    pub id: Uuid,
    pub value: f64,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub author_username: String,
}

impl From<ThreadRow> for ThreadSummary {
    fn from(row: ThreadRow) -> Self {
        ThreadSummary {
            id: row.id,
            value: row.value,
            created_at: row.created_at,
            author: UserSummary {
                id: row.author_id,
                username: row.author_username,
            },
        }
    }
}

/// Insert a thread owned by `author_id` and return it with author info
pub async fn create_thread(
    pool: &SqlitePool,
    value: f64,
    author_id: Uuid,
) -> Result<ThreadSummary, sqlx::Error> {
    let id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO threads (id, value, author_id, created_at)
        VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(id)
    .bind(value)
    .bind(author_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    get_thread(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Get one thread by ID
///
/// # Returns
/// Thread or None if not found
pub async fn get_thread(pool: &SqlitePool, id: Uuid) -> Result<Option<ThreadSummary>, sqlx::Error> {
    let row = sqlx::query_as::<_, ThreadRow>(
        r#"
        SELECT t.id, t.value, t.created_at, u.id AS author_id, u.username AS author_username
        FROM threads t
        JOIN users u ON u.id = t.author_id
        WHERE t.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(ThreadSummary::from))
}

/// List every thread, newest first
pub async fn list_threads(pool: &SqlitePool) -> Result<Vec<ThreadSummary>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ThreadRow>(
        r#"
        SELECT t.id, t.value, t.created_at, u.id AS author_id, u.username AS author_username
        FROM threads t
        JOIN users u ON u.id = t.author_id
        ORDER BY julianday(t.created_at) DESC, t.rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(ThreadSummary::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::users::create_user;
    use crate::backend::server::config::load_database;

    #[tokio::test]
    async fn test_create_and_get_thread() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let user = create_user(&pool, "alice", "hash").await.unwrap();

        let thread = create_thread(&pool, 10.0, user.id).await.unwrap();
        assert_eq!(thread.value, 10.0);
        assert_eq!(thread.author.username, "alice");

        let fetched = get_thread(&pool, thread.id).await.unwrap().unwrap();
        assert_eq!(fetched, thread);
        assert!(get_thread(&pool, Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_threads_newest_first() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        let user = create_user(&pool, "alice", "hash").await.unwrap();

        let first = create_thread(&pool, 1.0, user.id).await.unwrap();
        let second = create_thread(&pool, 2.0, user.id).await.unwrap();

        let ids: Vec<Uuid> = list_threads(&pool).await.unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn test_unknown_author_rejected() {
        let pool = load_database("sqlite::memory:").await.unwrap();
        assert!(create_thread(&pool, 1.0, Uuid::new_v4()).await.is_err());
    }
}
