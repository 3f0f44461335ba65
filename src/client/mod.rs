//! # Recipe Search HTTP Client
//!
//! This module talks to the Edamam Recipe Search v2 API.
//!
//! ## Modules
//!
//! - [`client`] - HTTP client issuing the search request
//! - [`source`] - The [`RecipeSource`] seam the search controller depends on
//! - [`types`] - Response types for hits and recipes
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_search::{ApiConfig, RecipeSearchClient, Query};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RecipeSearchClient::new(ApiConfig::new("app-id", "app-key"));
//!
//! let query = Query::parse("chicken")?;
//! let response = client.search_recipes(&query).await?;
//! println!("Found {} recipes", response.into_recipes().len());
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod source;
pub mod types;

pub use client::RecipeSearchClient;
pub use source::RecipeSource;
pub use types::*;
