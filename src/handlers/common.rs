//! Service endpoints: route manifest, health, version, and the unmatched-route fallback.

use crate::response::{error_body, route_manifest};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    recipes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub async fn index() -> Json<serde_json::Value> {
    Json(route_manifest())
}

/// 200 with the record count, or 503 when the data file could not be loaded.
pub async fn health(State(state): State<AppState>) -> Response {
    match state.store.len().await {
        Ok(count) => Json(HealthBody {
            status: "ok",
            recipes: Some(count),
            error: None,
        })
        .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthBody {
                status: "degraded",
                recipes: None,
                error: Some(e.to_string()),
            }),
        )
            .into_response(),
    }
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(error_body("not_found", "404 Not Found")),
    )
}
