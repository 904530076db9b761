//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Failures reported by [`crate::store::RecipeStore`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("failed to save data: {0}")]
    Persist(String),
    #[error("failed to load recipe file: {0}")]
    LoadFailed(String),
    #[error("no id left after {0}")]
    IdExhausted(u64),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Store(StoreError::NotFound(_)) | AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, "not_found")
            }
            AppError::Store(StoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "validation_error")
            }
            AppError::Store(StoreError::Persist(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error")
            }
            AppError::Store(StoreError::IdExhausted(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "id_exhausted")
            }
            AppError::Store(StoreError::LoadFailed(_)) => {
                (StatusCode::SERVICE_UNAVAILABLE, "load_error")
            }
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::PayloadTooLarge(_) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large")
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
