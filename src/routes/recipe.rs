//! Recipe CRUD routes under `/recipes`.
//! Static segments (`name`, `ingredients`) take priority over the `:id` parameter.

use crate::handlers::recipe::{
    create, delete, delete_by_name, list, read, read_by_name, search_by_ingredient, update,
    update_by_name,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn recipe_routes(state: AppState) -> Router {
    Router::new()
        .route("/recipes", get(list).post(create))
        .route("/recipes/:id", get(read).put(update).delete(delete))
        .route(
            "/recipes/name/:name",
            get(read_by_name).put(update_by_name).delete(delete_by_name),
        )
        .route("/recipes/ingredients/:term", get(search_by_ingredient))
        .with_state(state)
}
