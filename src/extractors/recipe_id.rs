//! Extract a numeric recipe id from the `:id` path segment.

use crate::error::AppError;
use crate::recipe::RecipeId;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// A segment that is not a valid id cannot name a record, so it is reported as not found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdParam(pub RecipeId);

#[async_trait]
impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        raw.trim()
            .parse::<RecipeId>()
            .map(IdParam)
            .map_err(|_| AppError::NotFound(format!("Recipe with ID {} not found.", raw)))
    }
}
