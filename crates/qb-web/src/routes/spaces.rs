//! Space route handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::Value;

use super::{authorization, to_response_error};
use crate::state::AppState;

pub async fn list_spaces(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, (StatusCode, String)> {
    let spaces = state
        .spaces
        .spaces(authorization(&headers))
        .await
        .map_err(to_response_error)?;

    Ok(Json(spaces))
}
