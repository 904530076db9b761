//! Common routes: manifest, health, version.

use crate::handlers::common::{health, index, version};
use crate::state::AppState;
use axum::{routing::get, Router};

/// GET /, GET /health, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/version", get(version))
        .with_state(state)
}
