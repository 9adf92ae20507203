//! Application state.

use std::path::PathBuf;
use std::sync::Arc;

use qb_core::settings::SettingsConfig;
use qb_core::{AuthProvider, SpaceProvider, TypeProvider};

/// Default prefix of the JSON API.
pub const DEFAULT_API_ROOT: &str = "/api";

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Prefix of the JSON API, normalized with [`normalize_api_root`].
    pub api_root: String,
    /// Directory holding the built single-page application.
    pub static_dir: PathBuf,
    pub settings: SettingsConfig,
}

impl WebConfig {
    pub fn new(api_root: &str, static_dir: impl Into<PathBuf>, settings: SettingsConfig) -> Self {
        Self {
            api_root: normalize_api_root(api_root),
            static_dir: static_dir.into(),
            settings,
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<dyn AuthProvider>,
    pub spaces: Arc<dyn SpaceProvider>,
    pub types: Arc<dyn TypeProvider>,
    pub config: Arc<WebConfig>,
}

impl AppState {
    /// Create state backed by a single upstream client.
    pub fn new<B>(backend: Arc<B>, config: WebConfig) -> Self
    where
        B: AuthProvider + SpaceProvider + TypeProvider + 'static,
    {
        Self {
            auth: backend.clone(),
            spaces: backend.clone(),
            types: backend,
            config: Arc::new(config),
        }
    }
}

/// Leading slash, no trailing slash. Blank stays empty.
pub fn normalize_api_root(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_api_root() {
        assert_eq!(normalize_api_root("/api"), "/api");
        assert_eq!(normalize_api_root("api/"), "/api");
        assert_eq!(normalize_api_root(" /service/api// "), "/service/api");
        assert_eq!(normalize_api_root("/"), "");
        assert_eq!(normalize_api_root(""), "");
    }
}
