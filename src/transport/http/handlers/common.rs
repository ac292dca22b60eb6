use crate::domain::error::ServiceError;
use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        e if e.is_not_found() => StatusCode::NOT_FOUND,
        ServiceError::IdSpaceExhausted { .. } => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Maps a service failure to `{"detail": ...}` with the matching status.
pub fn service_error_response(err: ServiceError) -> Response {
    let status = status_for(&err);
    let detail = if status.is_server_error() {
        error!(error = %err, "storage failure");
        format!("Internal error: {}", err)
    } else {
        err.to_string()
    };
    (status, Json(ErrorResponse { detail })).into_response()
}
