//! Recipe CRUD handlers: list, create, read, search, update, delete.

use crate::error::AppError;
use crate::extractors::{IdParam, JsonObject};
use crate::recipe::{RecipeDraft, RecipePatch};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// GET /recipes
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let recipes = state.store.list().await?;
    Ok((StatusCode::OK, Json(recipes)))
}

/// POST /recipes
pub async fn create(
    State(state): State<AppState>,
    JsonObject(draft): JsonObject<RecipeDraft>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// GET /recipes/:id
pub async fn read(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.get_by_id(id).await?;
    Ok((StatusCode::OK, Json(recipe)))
}

/// GET /recipes/name/:name
pub async fn read_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.get_by_name(&name).await?;
    Ok((StatusCode::OK, Json(recipe)))
}

/// GET /recipes/ingredients/:term
pub async fn search_by_ingredient(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let recipes = state.store.search_by_ingredient(&term).await?;
    Ok((StatusCode::OK, Json(recipes)))
}

/// PUT /recipes/:id
pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    JsonObject(patch): JsonObject<RecipePatch>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.update_by_id(id, patch).await?;
    Ok((StatusCode::OK, Json(recipe)))
}

/// PUT /recipes/name/:name
pub async fn update_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonObject(patch): JsonObject<RecipePatch>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.update_by_name(&name, patch).await?;
    Ok((StatusCode::OK, Json(recipe)))
}

/// DELETE /recipes/:id
pub async fn delete(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /recipes/name/:name
pub async fn delete_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.store.delete_by_name(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
