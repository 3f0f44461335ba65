//! Search lifecycle: validate, enter loading, fetch, settle.
//!
//! Each accepted search takes a request number from the state store. Only the
//! newest request may write the terminal state, so an older request that
//! resolves late is dropped instead of overwriting a newer search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::client::RecipeSource;
use crate::search::query::Query;
use crate::search::state::{SearchPhase, SearchState};
use crate::search::store::StateStore;

/// Query issued once when a view mounts.
pub const DEFAULT_QUERY: &str = "chicken";

pub struct SearchController<S> {
    source: Arc<S>,
    store: StateStore,
    mounted: Arc<AtomicBool>,
}

impl<S> Clone for SearchController<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            store: self.store.clone(),
            mounted: Arc::clone(&self.mounted),
        }
    }
}

impl<S: RecipeSource> SearchController<S> {
    pub fn new(source: S) -> Self {
        Self::with_store(source, StateStore::new())
    }

    pub fn with_store(source: S, store: StateStore) -> Self {
        Self {
            source: Arc::new(source),
            store,
            mounted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn state(&self) -> SearchState {
        self.store.snapshot()
    }

    /// Starts the default search the first time it is called.
    ///
    /// Later calls do nothing and return `None`.
    pub fn mount(&self) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("View already mounted, skipping default search");
            return None;
        }
        tracing::info!("Mounting search view with default query '{}'", DEFAULT_QUERY);
        Some(self.spawn_search(DEFAULT_QUERY))
    }

    /// Runs [`run_search`](Self::run_search) on a background task.
    pub fn spawn_search(&self, input: impl Into<String>) -> JoinHandle<()> {
        let controller = self.clone();
        let input = input.into();
        tokio::spawn(async move { controller.run_search(&input).await })
    }

    /// Runs one search and resolves once its outcome is in the state.
    ///
    /// Blank input only sets the validation message; nothing is sent.
    pub async fn run_search(&self, input: &str) {
        let query = match Query::parse(input) {
            Ok(query) => query,
            Err(e) => {
                tracing::warn!("Rejected search input {:?}: {}", input, e);
                let message = e.user_message();
                self.store.update(|state| state.error = Some(message));
                return;
            }
        };

        let request = self.store.begin(query.as_str());
        tracing::info!("Searching recipes for '{}' (request #{})", query, request);

        let outcome = self.source.search(&query).await;

        let next = match outcome {
            Ok(response) if response.is_empty() => SearchState::empty(query.as_str()),
            Ok(response) => SearchState::success(query.as_str(), response.into_recipes()),
            Err(e) => {
                tracing::error!("API Error: {}", e);
                SearchState::failed(query.as_str(), e.user_message())
            }
        };
        let phase = next.phase;
        let found = next.results.len();

        if !self.store.settle(request, next) {
            tracing::warn!(
                "Discarding stale response for '{}' (request #{})",
                query,
                request
            );
            return;
        }

        match phase {
            SearchPhase::Empty => tracing::warn!("No recipes found for '{}'", query),
            SearchPhase::Success => tracing::info!("Found {} recipes for '{}'", found, query),
            _ => {}
        }
    }
}
