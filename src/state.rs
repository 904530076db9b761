//! Shared application state for all routes.

use crate::store::RecipeStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecipeStore>,
}

impl AppState {
    pub fn new(store: RecipeStore) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }
}
