//! Row structs matching database tables.
//!
//! Rows derive `FromRow` and convert into the domain types of `todo_core`.

pub mod todo;
