//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so every failure uses the JSON error body.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use todo_core::types::DbId;
use validator::Validate;

use crate::error::AppError;

/// `axum::Json` whose rejections (syntax errors, missing fields, wrong
/// content type) become `400 BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// [`AppJson`] followed by `validator` rules declared on the payload type.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppJson(value) = AppJson::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(Self(value))
    }
}

/// The `{id}` path segment of a todo route.
///
/// Only unsigned decimal digits are accepted; anything else is `400`.
/// Values above the storage key range are `404`, since no row can carry them.
#[derive(Debug, Clone, Copy)]
pub struct TodoIdParam(pub DbId);

impl<S> FromRequestParts<S> for TodoIdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;
        parse_todo_id(&raw).map(TodoIdParam)
    }
}

fn parse_todo_id(raw: &str) -> Result<DbId, AppError> {
    // `u64::from_str` alone would accept a leading `+`.
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_id());
    }
    let id: u64 = raw.parse().map_err(|_| invalid_id())?;
    match DbId::try_from(id) {
        Ok(id) => Ok(id),
        Err(_) => Err(AppError::NotFound(format!("Todo with id {id} not found"))),
    }
}

fn invalid_id() -> AppError {
    AppError::BadRequest("invalid id".to_string())
}
