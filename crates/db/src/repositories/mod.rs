//! Repository layer.
//!
//! Each repository owns a pool handle and implements the matching
//! storage trait from `todo_core::repository`.

pub mod todo_repo;

pub use todo_repo::TodoRepo;
