use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::projects::loader::ProjectsError;
use crate::storage::StorageError;
use crate::tools::facts::FactError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Validation problems carry their message to the client. Environment failures
/// (storage, upstream, internal) are logged in full and answered generically.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Projects data error: {0}")]
    Projects(#[from] ProjectsError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] FactError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Could not save your changes".to_string(),
                )
            }
            AppError::Projects(e) => {
                tracing::error!("Projects data error: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "PROJECTS_UNAVAILABLE",
                    "Could not load projects".to_string(),
                )
            }
            AppError::Upstream(e) => {
                tracing::error!("Upstream error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Couldn’t fetch an Earth fact right now. Try again in a moment.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("hours must be a number".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_maps_to_bad_gateway() {
        let response = AppError::Upstream(FactError::Shape).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
