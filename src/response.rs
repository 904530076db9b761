//! Response bodies shared by handlers that do not go through [`crate::error::AppError`].

use serde_json::{json, Value};

pub fn error_body(code: &str, message: impl Into<String>) -> Value {
    json!({
        "error": {
            "code": code,
            "message": message.into()
        }
    })
}

/// Static help document served at `GET /`.
pub fn route_manifest() -> Value {
    json!({
        "message": "Welcome to the Recipes API!",
        "instructions": "All API endpoints are located under the /recipes path.",
        "endpoints": {
            "GET /recipes": "Retrieve all recipes.",
            "POST /recipes": "Create a new recipe.",
            "GET /recipes/:Id": "Retrieve a single recipe.",
            "GET /recipes/name/:Name": "Retrieve a recipe by exact Name.",
            "GET /recipes/ingredients/:Term": "Find recipes with an ingredient containing Term.",
            "PUT /recipes/:Id": "Update a recipe by ID (Name may change).",
            "PUT /recipes/name/:Name": "Update a recipe by Name (Name and ID are kept).",
            "DELETE /recipes/:Id": "Delete a recipe by ID.",
            "DELETE /recipes/name/:Name": "Delete a recipe by Name.",
            "GET /health": "Service and data file status.",
            "GET /version": "Service name and version."
        }
    })
}
