//! Query Builder Web Server
//!
//! Axum-based backend for the query builder frontend: settings, spaces and
//! types API plus the single-page application itself.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, MethodRouter},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub use state::{AppState, WebConfig, DEFAULT_API_ROOT};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/settings", get(routes::settings::get_settings))
        .route("/spaces", get(routes::spaces::list_spaces))
        .route(
            "/types",
            get(routes::types::list_types).post(routes::types::types_by_name),
        )
        .with_state(state.clone());

    let spa_index: MethodRouter = get(routes::spa::index).with_state(state.clone());
    let frontend = ServeDir::new(&state.config.static_dir).fallback(spa_index);

    let api_root = state.config.api_root.as_str();
    let router = if api_root.is_empty() {
        Router::new().merge(api_routes)
    } else {
        Router::new().nest(api_root, api_routes)
    };

    router
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let api_root = state.config.api_root.clone();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!(api_root = %api_root, "Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
