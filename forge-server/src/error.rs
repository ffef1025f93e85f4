//! HTTP mapping for API errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use forge_core::ForgeError;
use serde_json::json;
use thiserror::Error;

use crate::validation::FieldError;

/// Error surface of every handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Domain error from the core (message carried to the client).
    #[error(transparent)]
    Core(#[from] ForgeError),
    /// Request payload failed validation.
    #[error("Validation error")]
    Validation(Vec<FieldError>),
    /// Missing resource identified by a plain message.
    #[error("{0}")]
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => {
                tracing::debug!(count = errors.len(), "request failed validation");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "message": "Validation error", "errors": errors })),
                )
                    .into_response()
            }
            Self::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            Self::Core(err) => {
                let status = if err.is_not_found() {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %err, "request failed");
                }
                (status, Json(json!({ "message": err.to_string() }))).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_core_errors_map_to_404() {
        let response =
            ApiError::from(ForgeError::ProjectNotFound("p1".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_name_maps_to_500() {
        let response =
            ApiError::from(ForgeError::DuplicateName("Mon site".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn core_errors_display_transparently() {
        let err = ApiError::from(ForgeError::PageNotFound("p1".to_string()));
        assert!(err.to_string().contains("introuvable"));
    }

    #[test]
    fn validation_errors_map_to_400() {
        let response = ApiError::Validation(vec![FieldError::new("name", "name is required")])
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
