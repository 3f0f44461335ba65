//! # Search Controller
//!
//! Owns the [`SearchState`] of one view and the lifecycle of the searches that
//! change it.
//!
//! - [`query`] - Validated search terms
//! - [`state`] - The state record and its phases
//! - [`store`] - Observable state container
//! - [`controller`] - The search lifecycle itself

pub mod controller;
pub mod query;
pub mod state;
pub mod store;

pub use controller::{SearchController, DEFAULT_QUERY};
pub use query::Query;
pub use state::{SearchPhase, SearchState, NO_RESULTS_MESSAGE};
pub use store::StateStore;
