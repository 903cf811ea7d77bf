//! Unified error types for the Storefront API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Errors raised by repositories and services
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)
//!
//! `AppError` is the only type handlers return, so its `IntoResponse`
//! implementation is the single place where errors become status codes.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Domain(DomainError::NotFound(what)) => (
                StatusCode::NOT_FOUND,
                "Not found",
                format!("{} not found", what),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    "An unexpected error occurred".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "Bad request", msg.clone()),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn domain_not_found_maps_to_404() {
        let response =
            AppError::from(DomainError::NotFound("Customer 10".to_string())).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["message"], "Customer 10 not found");
    }

    #[tokio::test]
    async fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("expected value".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], "expected value");
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let response = AppError::from(DomainError::Database(
            "connection refused to 10.0.0.5".to_string(),
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(!body["message"].as_str().unwrap().contains("10.0.0.5"));
    }
}
