//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::api::requests::ValidationError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("user with id: {0} not found")]
    UserNotFound(String),

    // Server errors (5xx)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl From<crate::store::StoreError> for AppError {
    fn from(err: crate::store::StoreError) -> Self {
        match err {
            // Write paths never expect a miss; reads map NotFound with the
            // requested id before it reaches this conversion.
            crate::store::StoreError::NotFound => {
                AppError::Internal("unexpected store miss".to_string())
            }
            crate::store::StoreError::Database(e) => AppError::Database(e),
        }
    }
}

/// Error response body: `{"errorCode": <status>, "message": <text>}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "errorCode")]
    pub error_code: u16,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // 400 Bad Request
            AppError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            // 404 Not Found
            AppError::UserNotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),

            // 500 Internal Server Error. The underlying cause is logged but
            // never sent back to the caller.
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database operation failed".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::Config(e) => {
                tracing::error!("Config error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error_code: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
