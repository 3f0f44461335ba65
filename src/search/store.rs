//! Observable container for [`SearchState`].
//!
//! Backed by a `tokio::sync::watch` channel: writers modify the state under the
//! channel's lock, and every subscriber is notified of the change. Renderers
//! only ever read snapshots.
//!
//! Searches are sequenced here. [`StateStore::begin`] hands out the next
//! request number and enters loading in one step, and [`StateStore::settle`]
//! writes a terminal state only while its request still owns the state.

use std::sync::Arc;

use tokio::sync::watch;

use crate::search::state::SearchState;

#[derive(Clone)]
pub struct StateStore {
    tx: Arc<watch::Sender<SearchState>>,
}

impl StateStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SearchState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.tx.borrow().clone()
    }

    /// Receiver that observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.tx.subscribe()
    }

    /// Mutates the state in place and notifies subscribers.
    pub fn update(&self, modify: impl FnOnce(&mut SearchState)) {
        self.tx.send_modify(modify);
    }

    /// Enters loading for `query` and returns the request number that now owns
    /// the state.
    pub fn begin(&self, query: &str) -> u64 {
        let mut request = 0;
        self.tx.send_modify(|state| {
            request = state.request + 1;
            *state = SearchState {
                request,
                ..SearchState::loading(query)
            };
        });
        request
    }

    /// Writes `next` if `request` still owns the state.
    ///
    /// Returns `false`, leaving the state untouched, when a newer search began.
    pub fn settle(&self, request: u64, next: SearchState) -> bool {
        self.tx.send_if_modified(|state| {
            if state.request != request {
                return false;
            }
            *state = SearchState { request, ..next };
            true
        })
    }

    /// Waits until no search is outstanding and returns that state.
    pub async fn settled(&self) -> SearchState {
        let mut rx = self.subscribe();
        let state = match rx.wait_for(SearchState::is_settled).await {
            Ok(state) => state.clone(),
            Err(_) => self.snapshot(),
        };
        state
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
