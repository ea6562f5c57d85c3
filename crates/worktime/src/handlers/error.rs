use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use worktime_core::storage::{repository_error_to_status_code, RepositoryError};

use crate::models::ApiResponse;

/// Errors surfaced by the timer handlers.
///
/// Validation and not-found errors both render as 400: lookup misses keep
/// the 400 status the existing API contract promises its callers. Store
/// faults take their status from the core mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) | ApiError::NotFound(message) => {
                tracing::warn!(reason = %message, "Request rejected");
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Table store error");
                let status = StatusCode::from_u16(repository_error_to_status_code(&err))
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, err.to_string())
            }
        };

        (status, Json(ApiResponse::new(message))).into_response()
    }
}
