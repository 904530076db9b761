//! Router assembly: recipe and common routes plus CORS, tracing, and body-size layers.
//! Oversized bodies are rejected by the JSON extractor so the 413 carries the API error body.

pub mod common;
pub mod recipe;

pub use common::common_routes;
pub use recipe::recipe_routes;

use crate::handlers::common::not_found;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Full application router. Unmatched paths answer 404 with an error body.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .merge(common_routes(state.clone()))
        .merge(recipe_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(options_no_content))
}

/// Every OPTIONS request ends as an empty 204 carrying whatever CORS headers were attached.
async fn options_no_content(req: Request, next: Next) -> Response {
    if req.method() != Method::OPTIONS {
        return next.run(req).await;
    }
    let (mut parts, _) = next.run(req).await.into_parts();
    parts.status = StatusCode::NO_CONTENT;
    parts.headers.remove(header::CONTENT_TYPE);
    parts.headers.remove(header::CONTENT_LENGTH);
    Response::from_parts(parts, Body::empty())
}
