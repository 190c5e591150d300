//! Application usecases for todos.
//!
//! Sits between the HTTP handlers and the repository: applies defaults,
//! enforces entity invariants, and performs the read-modify-write for
//! partial updates. The read-modify-write is not atomic; two concurrent
//! updates to the same id can lose one of the writes.

use std::sync::Arc;

use crate::error::CoreError;
use crate::repository::TodoRepository;
use crate::todo::{
    validate_priority, validate_title, NewTodo, Todo, TodoChanges, DEFAULT_PRIORITY,
};
use crate::types::{DbId, Timestamp};

#[derive(Clone)]
pub struct TodoUsecase {
    repo: Arc<dyn TodoRepository>,
}

impl TodoUsecase {
    pub fn new(repo: Arc<dyn TodoRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Todo>, CoreError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: DbId) -> Result<Todo, CoreError> {
        self.repo.get(id).await
    }

    /// Create a todo. A missing priority defaults to [`DEFAULT_PRIORITY`].
    pub async fn create(
        &self,
        title: String,
        priority: Option<i16>,
        due_at: Option<Timestamp>,
    ) -> Result<Todo, CoreError> {
        validate_title(&title)?;
        let priority = priority.unwrap_or(DEFAULT_PRIORITY);
        validate_priority(priority)?;

        let todo = self
            .repo
            .create(&NewTodo {
                title,
                priority,
                due_at,
            })
            .await?;

        tracing::info!(todo_id = todo.id, priority = todo.priority, "Todo created");
        Ok(todo)
    }

    /// Apply `changes` to the stored todo `id`.
    ///
    /// Returns `NotFound` before any write if the todo does not exist.
    pub async fn update(&self, id: DbId, changes: TodoChanges) -> Result<Todo, CoreError> {
        changes.validate()?;

        let current = self.repo.get(id).await?;
        let merged = changes.merge_into(current);
        let todo = self.repo.update(&merged).await?;

        tracing::info!(todo_id = todo.id, done = todo.done, "Todo updated");
        Ok(todo)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.repo.get(id).await?;
        self.repo.delete(id).await?;

        tracing::info!(todo_id = id, "Todo deleted");
        Ok(())
    }
}
