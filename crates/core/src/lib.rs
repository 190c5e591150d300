//! Domain layer for the todo service.
//!
//! Holds the entity type, domain errors, validation rules, the repository
//! seam implemented by `todo-db`, and the usecase that the HTTP handlers
//! call into.

pub mod error;
pub mod patch;
pub mod repository;
pub mod todo;
pub mod types;
pub mod usecase;
