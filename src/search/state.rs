//! Search state record driving every render.

use serde::Serialize;

use crate::client::types::Recipe;

/// Shown when a search succeeds with no hits.
pub const NO_RESULTS_MESSAGE: &str = "No recipes found. Try a different search term.";

/// Where the last search stands.
///
/// `Empty` and `Failed` both surface through [`SearchState::error`]; the phase is
/// what tells them apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Empty,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    /// Recipes of the last successful search, in API order.
    pub results: Vec<Recipe>,
    pub loading: bool,
    /// Message for the error line. Also carries the no-results notice.
    pub error: Option<String>,
    /// Last query that reached the network.
    pub query: Option<String>,
    pub phase: SearchPhase,
    /// Sequence number of the search that owns this state, `0` before any.
    pub request: u64,
}

impl SearchState {
    /// State at the start of a search: loading, nothing else.
    pub fn loading(query: &str) -> Self {
        Self {
            results: Vec::new(),
            loading: true,
            error: None,
            query: Some(query.to_string()),
            phase: SearchPhase::Loading,
            request: 0,
        }
    }

    pub fn success(query: &str, results: Vec<Recipe>) -> Self {
        Self {
            results,
            loading: false,
            error: None,
            query: Some(query.to_string()),
            phase: SearchPhase::Success,
            request: 0,
        }
    }

    pub fn empty(query: &str) -> Self {
        Self {
            results: Vec::new(),
            loading: false,
            error: Some(NO_RESULTS_MESSAGE.to_string()),
            query: Some(query.to_string()),
            phase: SearchPhase::Empty,
            request: 0,
        }
    }

    pub fn failed(query: &str, message: String) -> Self {
        Self {
            results: Vec::new(),
            loading: false,
            error: Some(message),
            query: Some(query.to_string()),
            phase: SearchPhase::Failed,
            request: 0,
        }
    }

    /// Whether a search is still outstanding.
    pub fn is_settled(&self) -> bool {
        !self.loading
    }
}
