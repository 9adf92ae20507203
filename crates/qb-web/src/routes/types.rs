//! Type route handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use qb_core::TypeEntity;
use serde_json::Value;

use super::{authorization, to_response_error};
use crate::state::AppState;

pub async fn list_types(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TypeEntity>>, (StatusCode, String)> {
    let types = state
        .types
        .types(authorization(&headers))
        .await
        .map_err(to_response_error)?;

    Ok(Json(types))
}

pub async fn types_by_name(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(names): Json<Vec<String>>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let types = state
        .types
        .types_by_name(authorization(&headers), &names)
        .await
        .map_err(to_response_error)?;

    Ok(Json(types))
}
