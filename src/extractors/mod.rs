pub mod json;
pub mod recipe_id;

pub use json::JsonObject;
pub use recipe_id::IdParam;
