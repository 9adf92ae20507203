//! Single-page application fallback.
//!
//! Client-side routes of the frontend (`/queries/123`, ...) have no file on
//! disk. Requests that reach this handler after the static file lookup
//! failed get `index.html`, unless they look like API calls or assets.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::state::AppState;

/// Extensions of static assets that must never fall back to `index.html`.
const ASSET_EXTENSIONS: &[&str] = &["js", "css", "ico", "png", "jpg", "gif", "html", "svg"];

/// Whether `path` should be answered with the frontend's `index.html`.
pub fn is_spa_route(path: &str, api_root: &str) -> bool {
    let under_api = path == api_root
        || path
            .strip_prefix(api_root)
            .is_some_and(|rest| rest.starts_with('/'));

    !(under_api || path == "/error" || has_asset_extension(path))
}

fn has_asset_extension(path: &str) -> bool {
    let file_name = path.rsplit('/').next().unwrap_or_default();
    file_name
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ASSET_EXTENSIONS.contains(&ext))
}

/// Fallback - serve `index.html` for client-side routes.
pub async fn index(State(state): State<AppState>, uri: Uri) -> Response {
    if !is_spa_route(uri.path(), &state.config.api_root) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let index = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!(path = %index.display(), error = %e, "Cannot read frontend index");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_routes_fall_back() {
        assert!(is_spa_route("/", "/api"));
        assert!(is_spa_route("/queries/abc-123", "/api"));
        assert!(is_spa_route("/apis", "/api"));
        assert!(is_spa_route("/v1.2/query", "/api"));
    }

    #[test]
    fn test_api_paths_do_not_fall_back() {
        assert!(!is_spa_route("/api", "/api"));
        assert!(!is_spa_route("/api/", "/api"));
        assert!(!is_spa_route("/api/unknown", "/api"));
        assert!(!is_spa_route("/error", "/api"));
    }

    #[test]
    fn test_assets_do_not_fall_back() {
        assert!(!is_spa_route("/static/main.js", "/api"));
        assert!(!is_spa_route("/favicon.ico", "/api"));
        assert!(!is_spa_route("/index.html", "/api"));
        assert!(!is_spa_route("/img/logo.svg", "/api"));
        assert!(is_spa_route("/docs/readme.md", "/api"));
    }

    #[test]
    fn test_empty_api_root_covers_everything() {
        assert!(!is_spa_route("/", ""));
        assert!(!is_spa_route("/queries", ""));
    }
}
