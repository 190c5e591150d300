//! Handlers for the `/todos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use todo_core::todo::Todo;

use crate::dto::{CreateTodoRequest, UpdateTodoRequest};
use crate::error::AppResult;
use crate::extract::{TodoIdParam, ValidatedJson};
use crate::state::AppState;

/// GET /api/v1/todos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = state.todos.list().await?;
    Ok(Json(todos))
}

/// GET /api/v1/todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    TodoIdParam(id): TodoIdParam,
) -> AppResult<Json<Todo>> {
    let todo = state.todos.get(id).await?;
    Ok(Json(todo))
}

/// POST /api/v1/todos
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTodoRequest>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let todo = state
        .todos
        .create(input.title, input.priority, input.due_at)
        .await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /api/v1/todos/{id}
pub async fn update(
    State(state): State<AppState>,
    TodoIdParam(id): TodoIdParam,
    ValidatedJson(input): ValidatedJson<UpdateTodoRequest>,
) -> AppResult<Json<Todo>> {
    let todo = state.todos.update(id, input.into()).await?;
    Ok(Json(todo))
}

/// DELETE /api/v1/todos/{id}
pub async fn delete(
    State(state): State<AppState>,
    TodoIdParam(id): TodoIdParam,
) -> AppResult<StatusCode> {
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
