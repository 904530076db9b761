//! JSON object body extractor whose rejections use the API error body.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Body that must be a JSON object deserializable into `T`. Anything else is a 400.
#[derive(Debug)]
pub struct JsonObject<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonObject<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(e.body_text())
            } else {
                AppError::BadRequest(e.body_text())
            }
        })?;
        if !value.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        serde_json::from_value(value)
            .map(JsonObject)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}
