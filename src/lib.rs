//! Recipe API: a JSON-file backed recipe collection served over HTTP.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod recipe;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, StoreError};
pub use recipe::{Recipe, RecipeDraft, RecipeId, RecipePatch};
pub use routes::{app, common_routes, recipe_routes};
pub use state::AppState;
pub use store::{LoadState, RecipeStore};
