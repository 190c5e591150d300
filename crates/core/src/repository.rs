//! Storage seam for todo persistence.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::todo::{NewTodo, Todo};
use crate::types::DbId;

/// Persistence operations on the `todos` table.
///
/// Implementations translate their own "row not found" condition into
/// [`CoreError::NotFound`] and every other storage failure into
/// [`CoreError::Internal`].
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// All todos ordered by id ascending.
    async fn list(&self) -> Result<Vec<Todo>, CoreError>;

    async fn get(&self, id: DbId) -> Result<Todo, CoreError>;

    /// Insert a todo, returning it with the storage-assigned id and timestamps.
    async fn create(&self, input: &NewTodo) -> Result<Todo, CoreError>;

    /// Persist every mutable field of `todo`, refreshing `updated_at`.
    async fn update(&self, todo: &Todo) -> Result<Todo, CoreError>;

    async fn delete(&self, id: DbId) -> Result<(), CoreError>;
}
