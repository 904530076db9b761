//! Recipe server: loads the recipe file named by `RECIPES_FILE` and serves the REST API.
//!
//! Run from repo root: `cargo run -p recipe-server`

use recipe_api::{app, AppState, RecipeStore, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(
                    "recipe_api=info,recipe_server=info,tower_http=info",
                )
            }),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = RecipeStore::open(&config.data_path, config.create_if_missing).await;
    if let Some(reason) = store.load_error().await {
        tracing::error!("starting without data: {}", reason);
    }

    let router = app(AppState::new(store), config.max_body_bytes);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Recipe server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
