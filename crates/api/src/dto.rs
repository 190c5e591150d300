//! Request bodies for the `/todos` endpoints.

use serde::Deserialize;
use todo_core::patch::Patch;
use todo_core::todo::TodoChanges;
use todo_core::types::Timestamp;
use validator::Validate;

/// Body of `POST /todos`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    /// Defaults to 3 if omitted.
    #[validate(range(min = 1, max = 5, message = "priority must be between 1 and 5"))]
    pub priority: Option<i16>,
    pub due_at: Option<Timestamp>,
}

/// Body of `PUT /todos/{id}`.
///
/// `title` and `done` are required. `due_at` distinguishes an omitted key
/// from an explicit `null`; see [`Patch`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub done: bool,
    #[validate(range(min = 1, max = 5, message = "priority must be between 1 and 5"))]
    pub priority: Option<i16>,
    #[serde(default)]
    pub due_at: Patch<Timestamp>,
}

impl From<UpdateTodoRequest> for TodoChanges {
    fn from(req: UpdateTodoRequest) -> Self {
        TodoChanges {
            title: req.title,
            done: req.done,
            priority: req.priority,
            due_at: req.due_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(json: serde_json::Value) -> Result<UpdateTodoRequest, serde_json::Error> {
        serde_json::from_value(json)
    }

    #[test]
    fn update_requires_title_and_done() {
        let err = update(serde_json::json!({"title": "x"})).unwrap_err();
        assert!(err.to_string().contains("missing field `done`"));

        let err = update(serde_json::json!({"done": true})).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"));
    }

    #[test]
    fn update_due_at_presence_is_preserved() {
        let omitted = update(serde_json::json!({"title": "x", "done": false})).unwrap();
        assert_eq!(omitted.due_at, Patch::Unchanged);

        let cleared =
            update(serde_json::json!({"title": "x", "done": false, "due_at": null})).unwrap();
        assert_eq!(cleared.due_at, Patch::Clear);
    }

    #[test]
    fn priority_range_is_validated() {
        let req = CreateTodoRequest {
            title: "x".into(),
            priority: Some(6),
            due_at: None,
        };
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("priority must be between 1 and 5"));

        let req = CreateTodoRequest {
            priority: None,
            ..req
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_title_is_invalid() {
        let req = UpdateTodoRequest {
            title: String::new(),
            done: false,
            priority: None,
            due_at: Patch::Unchanged,
        };
        assert!(req.validate().is_err());
    }
}
