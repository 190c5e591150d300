//! Static web UI, served from a directory on disk when `UI_DIR` is set.

use std::path::Path;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Path the UI is mounted under.
pub const UI_PREFIX: &str = "/ui";

/// Serve `dir` under `/ui` and send `/` there.
///
/// ```text
/// GET /         -> 303 /ui/
/// GET /ui/...   -> files from `dir` (index.html for directories)
/// ```
pub fn router(dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::to("/ui/") }))
        .nest_service(
            UI_PREFIX,
            ServeDir::new(dir).append_index_html_on_directories(true),
        )
}
