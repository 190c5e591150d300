//! Translation of sqlx failures into domain errors.

use todo_core::error::CoreError;
use todo_core::types::DbId;

/// Map a storage error for a lookup of todo `id`.
///
/// `RowNotFound` becomes [`CoreError::NotFound`]; everything else is
/// passed through opaquely as [`CoreError::Internal`].
pub fn classify(err: sqlx::Error, id: DbId) -> CoreError {
    match err {
        sqlx::Error::RowNotFound => CoreError::todo_not_found(id),
        other => internal(other),
    }
}

/// Map a storage error where "not found" has no meaning (list, insert).
pub fn internal(err: sqlx::Error) -> CoreError {
    CoreError::Internal(err.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn row_not_found_becomes_domain_not_found() {
        let err = classify(sqlx::Error::RowNotFound, 7);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Todo with id 7");
    }

    #[test]
    fn other_errors_stay_internal() {
        let err = classify(sqlx::Error::PoolTimedOut, 7);
        assert_matches!(err, CoreError::Internal(msg) if msg.contains("pool timed out"));
    }
}
