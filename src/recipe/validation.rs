//! Create-time validation for recipe drafts.

use super::RecipeDraft;
use crate::error::StoreError;

pub const MISSING_REQUIRED: &str = "Missing required fields (Name/Ingredients).";

pub struct DraftValidator;

impl DraftValidator {
    /// A draft needs a non-blank `Name` and a non-empty ingredient list.
    pub fn validate(draft: &RecipeDraft) -> Result<(), StoreError> {
        let has_name = draft
            .name
            .as_deref()
            .map(|n| !n.trim().is_empty())
            .unwrap_or(false);
        let has_ingredients = draft
            .ingredients
            .as_ref()
            .map(|list| !list.is_empty())
            .unwrap_or(false);
        if !has_name || !has_ingredients {
            return Err(StoreError::Validation(MISSING_REQUIRED.into()));
        }
        Ok(())
    }
}
