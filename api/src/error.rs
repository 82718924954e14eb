//! Unified error type for request handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Failures a request can end with. Each variant maps to one status code;
/// all failures are terminal per-request and reported as status + JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid sort key '{0}'")]
    InvalidSortKey(String),

    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// JSON body sent alongside an error status.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(resource) => {
                (StatusCode::NOT_FOUND, format!("{resource} not found"))
            }
            ApiError::InvalidSortKey(key) => {
                (StatusCode::BAD_REQUEST, format!("Invalid sort key '{key}'"))
            }
            ApiError::Database(e) => {
                // Driver internals stay out of the response body.
                error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                message,
            }),
        )
            .into_response()
    }
}
