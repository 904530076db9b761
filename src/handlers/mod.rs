//! HTTP handlers for recipe CRUD and service endpoints.

pub mod common;
pub mod recipe;
pub use common::*;
pub use recipe::*;
