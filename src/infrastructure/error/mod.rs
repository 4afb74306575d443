use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::animal::{BodyError, CreateError, StoreError, ValidationError};

/// Errors surfaced by the HTTP handlers.
///
/// The client always receives a fixed message for the failing operation plus
/// the raw text of the underlying error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] BodyError),

    #[error("Failed to list animals: {0}")]
    ListAnimals(#[source] StoreError),

    #[error("Failed to create animal: {0}")]
    CreateAnimal(#[source] CreateError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::ListAnimals(_) | AppError::CreateAnimal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Fixed, client-facing message for the failing operation.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::MalformedBody(_) => "invalid input",
            AppError::ListAnimals(_) => "error getting animals",
            AppError::CreateAnimal(_) => "error creating animal",
        }
    }

    /// Raw description of the underlying error.
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::MalformedBody(e) => e.to_string(),
            AppError::ListAnimals(e) => e.to_string(),
            AppError::CreateAnimal(e) => e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.message(),
            error: self.detail(),
        };

        if status.is_server_error() {
            tracing::error!(
                status = %status.as_u16(),
                message = %body.message,
                error = %body.error,
                "API error"
            );
        } else {
            tracing::debug!(
                status = %status.as_u16(),
                error = %body.error,
                "Rejected request"
            );
        }

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::Animal;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::from(ValidationError::required("name"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "invalid input");
        assert_eq!(
            err.detail(),
            "field validation for 'name' failed on the 'required' tag"
        );
    }

    #[test]
    fn test_malformed_body_maps_to_bad_request() {
        let err = AppError::from(BodyError::NotAnObject);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "invalid input");
        assert_eq!(err.detail(), "request body must be a JSON object");
    }

    #[test]
    fn test_store_errors_map_to_internal_error() {
        let err = AppError::ListAnimals(StoreError::backend("error"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "error getting animals");
        assert_eq!(err.detail(), "error");

        let err = AppError::CreateAnimal(CreateError::new(
            Animal::new("dog"),
            StoreError::backend("connection reset"),
        ));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "error creating animal");
        assert_eq!(err.detail(), "connection reset");
    }

    #[tokio::test]
    async fn test_response_body() {
        let response = AppError::ListAnimals(StoreError::backend("db down")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "error getting animals", "error": "db down"})
        );
    }
}
