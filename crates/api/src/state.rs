use std::sync::Arc;

use todo_core::usecase::TodoUsecase;
use todo_db::repositories::TodoRepo;
use todo_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used directly by the health check.
    pub pool: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Todo usecases backed by the SQLite repository.
    pub todos: TodoUsecase,
}

impl AppState {
    /// Wire the repository and usecase layers on top of `pool`.
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        let repo = TodoRepo::new(pool.clone());
        Self {
            pool,
            config: Arc::new(config),
            todos: TodoUsecase::new(Arc::new(repo)),
        }
    }
}
