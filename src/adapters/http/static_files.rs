use std::path::Path;

use axum::{handler::HandlerWithoutStateExt, Router};
use tower_http::services::ServeDir;

use super::handlers::not_found;

/// Files under `root`, `index.html` for directories. Misses and traversal
/// attempts end in the JSON 404.
pub fn router(root: &Path) -> Router {
    let files = ServeDir::new(root)
        .append_index_html_on_directories(true)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found.into_service());

    Router::new().fallback_service(files)
}
