//! The todo entity, its inputs, and the rules that keep it valid.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::patch::Patch;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Priority limits
// ---------------------------------------------------------------------------

/// Priority assigned when a create request does not supply one.
pub const DEFAULT_PRIORITY: i16 = 3;

/// Minimum allowed priority value.
pub const MIN_PRIORITY: i16 = 1;

/// Maximum allowed priority value.
pub const MAX_PRIORITY: i16 = 5;

// ---------------------------------------------------------------------------
// Entity and inputs
// ---------------------------------------------------------------------------

/// A stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub done: bool,
    pub priority: i16,
    pub due_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Fields for inserting a todo. Identifier and timestamps are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub priority: i16,
    pub due_at: Option<Timestamp>,
}

/// A partial update as understood by the domain.
///
/// `title` and `done` always overwrite. `priority` is kept when `None`.
/// `due_at` follows [`Patch`] semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: String,
    pub done: bool,
    pub priority: Option<i16>,
    pub due_at: Patch<Timestamp>,
}

impl TodoChanges {
    /// Check the changes against entity invariants without touching storage.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)?;
        if let Some(priority) = self.priority {
            validate_priority(priority)?;
        }
        Ok(())
    }

    /// Produce the entity that should be persisted for `current`.
    pub fn merge_into(self, mut current: Todo) -> Todo {
        current.title = self.title;
        current.done = self.done;
        if let Some(priority) = self.priority {
            current.priority = priority;
        }
        current.due_at = self.due_at.apply(current.due_at);
        current
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a todo title: must contain at least one non-whitespace character.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".to_string()));
    }
    Ok(())
}

/// Validate a priority value is within the allowed range.
pub fn validate_priority(priority: i16) -> Result<(), CoreError> {
    if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
        return Err(CoreError::Validation(format!(
            "Priority must be between {MIN_PRIORITY} and {MAX_PRIORITY}, got {priority}"
        )));
    }
    Ok(())
}
