//! The recipe record plus the create and patch payloads that produce it.
//!
//! Wire names follow the data file: `Id`, `Name`, `Styles`, `ingredients`,
//! `wholesaleCost`, `suggestedPrice`. Payloads also accept the capitalised
//! `Ingredients`, `WholesaleCost` and `SuggestedPrice` spellings.

pub mod coerce;
pub mod validation;

pub use coerce::coerce_price;
pub use validation::DraftValidator;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type RecipeId = u64;

/// One stored recipe. Prices serialize as `null` when there is no value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "Id")]
    pub id: RecipeId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Styles", default, deserialize_with = "coerce::string_list")]
    pub styles: Vec<String>,
    #[serde(
        rename = "ingredients",
        alias = "Ingredients",
        default,
        deserialize_with = "coerce::string_list"
    )]
    pub ingredients: Vec<String>,
    #[serde(
        rename = "wholesaleCost",
        alias = "WholesaleCost",
        default,
        deserialize_with = "coerce::price"
    )]
    pub wholesale_cost: Option<f64>,
    #[serde(
        rename = "suggestedPrice",
        alias = "SuggestedPrice",
        default,
        deserialize_with = "coerce::price"
    )]
    pub suggested_price: Option<f64>,
}

impl Recipe {
    /// Case-insensitive name comparison used by the by-name update and delete paths.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// True when any ingredient contains `fragment`, ignoring case.
    pub fn has_ingredient_like(&self, fragment: &str) -> bool {
        let needle = fragment.to_lowercase();
        self.ingredients
            .iter()
            .any(|ingredient| ingredient.to_lowercase().contains(&needle))
    }

    /// Overlay the fields present in `patch` onto a copy of this record. The id never changes;
    /// callers decide whether a supplied name is kept.
    pub fn merged(&self, patch: RecipePatch) -> Recipe {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(styles) = patch.styles {
            next.styles = styles;
        }
        if let Some(ingredients) = patch.ingredients {
            next.ingredients = ingredients;
        }
        if let Some(cost) = patch.wholesale_cost {
            next.wholesale_cost = coerce_price(&cost);
        }
        if let Some(price) = patch.suggested_price {
            next.suggested_price = coerce_price(&price);
        }
        next.id = self.id;
        next
    }
}

/// Body of a create request. A client-supplied `Id` is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecipeDraft {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Styles")]
    pub styles: Option<Vec<String>>,
    #[serde(rename = "ingredients", alias = "Ingredients")]
    pub ingredients: Option<Vec<String>>,
    #[serde(rename = "wholesaleCost", alias = "WholesaleCost")]
    pub wholesale_cost: Option<Value>,
    #[serde(rename = "suggestedPrice", alias = "SuggestedPrice")]
    pub suggested_price: Option<Value>,
}

impl RecipeDraft {
    /// Build the stored record. Run [`DraftValidator::validate`] first.
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name.unwrap_or_default(),
            styles: self.styles.unwrap_or_default(),
            ingredients: self.ingredients.unwrap_or_default(),
            wholesale_cost: self.wholesale_cost.as_ref().and_then(coerce_price),
            suggested_price: self.suggested_price.as_ref().and_then(coerce_price),
        }
    }
}

/// Body of an update request. Absent fields leave the record untouched; an explicit
/// `null` price clears it.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RecipePatch {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Styles")]
    pub styles: Option<Vec<String>>,
    #[serde(rename = "ingredients", alias = "Ingredients")]
    pub ingredients: Option<Vec<String>>,
    #[serde(
        rename = "wholesaleCost",
        alias = "WholesaleCost",
        default,
        deserialize_with = "coerce::present"
    )]
    pub wholesale_cost: Option<Value>,
    #[serde(
        rename = "suggestedPrice",
        alias = "SuggestedPrice",
        default,
        deserialize_with = "coerce::present"
    )]
    pub suggested_price: Option<Value>,
}
