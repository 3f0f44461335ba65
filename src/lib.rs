//! # Recipe Search
//!
//! A recipe search view over the Edamam Recipe Search API. A query goes in,
//! one request goes out, and the outcome lands in an observable state that a
//! presenter turns into a loading skeleton, an error line, or a grid of recipe
//! cards.
//!
//! ## Modules
//!
//! - [`search`] - Search controller, state and state store
//! - [`presenter`] - Pure rendering of the state into a page
//! - [`client`] - HTTP client for the search endpoint
//! - [`server`] - MCP server hosting one search view per session
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_search::{presenter, ApiConfig, RecipeSearchClient, SearchController};
//!
//! # async fn example() {
//! let client = RecipeSearchClient::new(ApiConfig::new("app-id", "app-key"));
//! let controller = SearchController::new(client);
//!
//! controller.run_search("chicken").await;
//! let page = presenter::render(&controller.state());
//! println!("{} cards", page.body.cards().len());
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod presenter;
pub mod search;
pub mod server;

#[cfg(test)]
mod test_support;

pub use client::RecipeSearchClient;
pub use config::ApiConfig;
pub use error::SearchError;
pub use search::{Query, SearchController, SearchState};
pub use server::RecipeSearchServer;
