//! Repository for the `todos` table.

use async_trait::async_trait;
use chrono::Utc;
use todo_core::error::CoreError;
use todo_core::repository::TodoRepository;
use todo_core::todo::{NewTodo, Todo};
use todo_core::types::DbId;

use crate::error::{classify, internal};
use crate::models::todo::TodoRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, done, priority, due_at, created_at, updated_at";

/// Provides CRUD operations for todos. Every method issues a single statement.
#[derive(Clone)]
pub struct TodoRepo {
    pool: DbPool,
}

impl TodoRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for TodoRepo {
    async fn list(&self) -> Result<Vec<Todo>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM todos ORDER BY id ASC");
        let rows = sqlx::query_as::<_, TodoRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(internal)?;
        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn get(&self, id: DbId) -> Result<Todo, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?1");
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map(Todo::from)
            .map_err(|e| classify(e, id))
    }

    /// New rows start with `done = false`; both timestamps are set to now.
    async fn create(&self, input: &NewTodo) -> Result<Todo, CoreError> {
        let query = format!(
            "INSERT INTO todos (title, done, priority, due_at, created_at, updated_at)
             VALUES (?1, 0, ?2, ?3, ?4, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(&input.title)
            .bind(input.priority)
            .bind(input.due_at)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map(Todo::from)
            .map_err(internal)
    }

    /// Overwrite the mutable columns of an existing row. `created_at` is untouched.
    async fn update(&self, todo: &Todo) -> Result<Todo, CoreError> {
        let query = format!(
            "UPDATE todos SET
                title = ?2,
                done = ?3,
                priority = ?4,
                due_at = ?5,
                updated_at = ?6
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoRow>(&query)
            .bind(todo.id)
            .bind(&todo.title)
            .bind(todo.done)
            .bind(todo.priority)
            .bind(todo.due_at)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map(Todo::from)
            .map_err(|e| classify(e, todo.id))
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| classify(e, id))?;

        if result.rows_affected() == 0 {
            tracing::debug!(todo_id = id, "Delete matched no rows");
            return Err(CoreError::todo_not_found(id));
        }
        Ok(())
    }
}
