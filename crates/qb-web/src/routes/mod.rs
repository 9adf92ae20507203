//! Route handlers.

pub mod settings;
pub mod spa;
pub mod spaces;
pub mod types;

use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use qb_core::QbError;
use tracing::warn;

/// The caller's `Authorization` header, forwarded upstream as-is.
pub(crate) fn authorization(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok())
}

/// Map a core error onto the response returned to the frontend.
pub(crate) fn to_response_error(err: QbError) -> (StatusCode, String) {
    let status = match &err {
        QbError::UpstreamStatus { status, .. } => match *status {
            401 => StatusCode::UNAUTHORIZED,
            403 => StatusCode::FORBIDDEN,
            404 => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_GATEWAY,
        },
        QbError::Upstream(_) | QbError::Decode { .. } | QbError::Json(_) => StatusCode::BAD_GATEWAY,
        QbError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(error = %err, status = %status, "Request failed");
    (status, err.to_string())
}
