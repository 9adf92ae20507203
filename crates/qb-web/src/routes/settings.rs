//! Settings route handler.

use axum::{extract::State, http::StatusCode, Json};
use qb_core::settings::Settings;
use qb_core::Envelope;
use tracing::debug;

use super::to_response_error;
use crate::state::AppState;

/// GET {root}/settings - frontend settings, or 503 while no auth endpoint is known.
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Settings>>, (StatusCode, String)> {
    let endpoint = state.auth.auth_endpoint().await.map_err(to_response_error)?;

    match Settings::assemble(&state.config.settings, endpoint.as_deref()) {
        Some(settings) => Ok(Json(Envelope::new(settings))),
        None => {
            debug!("No authentication endpoint available");
            Err((StatusCode::SERVICE_UNAVAILABLE, String::new()))
        }
    }
}
