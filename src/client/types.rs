//! Type definitions for the Edamam Recipe Search v2 API.
//!
//! ## Key Types
//!
//! - [`SearchResponse`] - Top-level search payload with its list of hits
//! - [`Hit`] - Wrapper around a single recipe
//! - [`Recipe`] - Recipe record passed through to the presenter
//!
//! ## Pass-through
//!
//! A [`Recipe`] keeps the exact JSON object the API sent and serializes back to
//! it. The typed fields are a read-only view used for rendering; `null` or
//! missing values in them fall back to empty.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Search endpoint response.
///
/// `hits` may be missing or `null` in practice; both mean "no results".
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Index of the first hit in this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<u32>,
    /// Index of the last hit in this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    /// Total number of matches reported by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Pagination links, never followed
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
    /// Ordered list of hits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hits: Option<Vec<Hit>>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.hits.as_ref().map_or(true, |hits| hits.is_empty())
    }

    /// Unwraps every hit into its inner recipe, preserving order.
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.hits
            .unwrap_or_default()
            .into_iter()
            .map(|hit| hit.recipe)
            .collect()
    }
}

/// One search hit wrapping a single recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hit {
    pub recipe: Recipe,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Value>,
}

/// A recipe as returned by the search API.
///
/// Serializes back to the JSON object it was parsed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Recipe {
    /// Stable recipe URI
    pub uri: Option<String>,
    /// Display name
    pub label: String,
    /// Image URL
    pub image: Option<String>,
    /// Publisher name
    pub source: Option<String>,
    /// Original recipe page
    pub url: Option<String>,
    /// Number of servings
    pub servings: Option<f64>,
    pub diet_labels: Vec<String>,
    pub health_labels: Vec<String>,
    pub ingredient_lines: Vec<String>,
    pub ingredients: Vec<Ingredient>,
    /// Total calories for the whole recipe
    pub calories: Option<f64>,
    /// Total time in minutes, `0` when unknown
    pub total_time: Option<f64>,
    pub cuisine_type: Vec<String>,
    pub meal_type: Vec<String>,
    pub dish_type: Vec<String>,
    raw: Value,
}

impl Recipe {
    /// Parses a recipe object, keeping it verbatim for pass-through.
    pub fn from_json(raw: Value) -> Result<Self, serde_json::Error> {
        let fields = RecipeFields::deserialize(&raw)?;
        Ok(Self {
            uri: fields.uri,
            label: fields.label,
            image: fields.image,
            source: fields.source,
            url: fields.url,
            servings: fields.servings,
            diet_labels: fields.diet_labels,
            health_labels: fields.health_labels,
            ingredient_lines: fields.ingredient_lines,
            ingredients: fields.ingredients,
            calories: fields.calories,
            total_time: fields.total_time,
            cuisine_type: fields.cuisine_type,
            meal_type: fields.meal_type,
            dish_type: fields.dish_type,
            raw,
        })
    }

    /// The record exactly as the API sent it.
    pub fn as_json(&self) -> &Value {
        &self.raw
    }

    /// Calories per serving, when both totals are known.
    pub fn calories_per_serving(&self) -> Option<f64> {
        match (self.calories, self.servings) {
            (Some(calories), Some(servings)) if servings > 0.0 => Some(calories / servings),
            _ => None,
        }
    }

    /// Ingredient count, falling back to the raw ingredient lines.
    pub fn ingredient_count(&self) -> usize {
        if self.ingredients.is_empty() {
            self.ingredient_lines.len()
        } else {
            self.ingredients.len()
        }
    }
}

impl TryFrom<Value> for Recipe {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        Self::from_json(raw)
    }
}

impl From<Recipe> for Value {
    fn from(recipe: Recipe) -> Self {
        recipe.raw
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeFields {
    #[serde(default)]
    uri: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    label: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "yield", default)]
    servings: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    diet_labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    health_labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    ingredient_lines: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    ingredients: Vec<Ingredient>,
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    total_time: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    cuisine_type: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    meal_type: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    dish_type: Vec<String>,
}

/// A parsed ingredient of a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub measure: Option<String>,
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub weight: Option<f64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
