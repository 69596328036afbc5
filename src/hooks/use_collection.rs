// ============================================================================
// COLLECTION HOOK - shared fetch lifecycle for every listing screen
// ============================================================================
// One parametric abstraction instead of copy-pasted per-screen plumbing:
// Idle -> Loading on every (re)fetch, then Loaded or Error. In-flight
// requests are never cancelled, so each fetch carries a ticket from a
// monotonic sequencer and a response only commits if its ticket is still
// the latest issued - a late response from an abandoned filter can never
// overwrite newer state.
// ============================================================================

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}

/// Tags fetches with monotonically increasing tickets; only the latest
/// issued ticket may commit its response.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

pub struct UseCollectionHandle<T: 'static> {
    state: UseStateHandle<FetchState<T>>,
    seq: Rc<RefCell<RequestSequencer>>,
}

impl<T> Clone for UseCollectionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            seq: self.seq.clone(),
        }
    }
}

impl<T: 'static> UseCollectionHandle<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Kick off a fetch. Moves to Loading immediately; the result is
    /// applied only if no newer fetch was issued in the meantime.
    pub fn run<Fut>(&self, fut: Fut)
    where
        Fut: Future<Output = Result<Vec<T>, String>> + 'static,
    {
        let ticket = self.seq.borrow_mut().issue();
        self.state.set(FetchState::Loading);

        let state = self.state.clone();
        let seq = self.seq.clone();
        spawn_local(async move {
            let result = fut.await;
            if !seq.borrow().is_latest(ticket) {
                log::warn!("⏭️ Discarding stale response (ticket {})", ticket);
                return;
            }
            match result {
                Ok(items) => state.set(FetchState::Loaded(items)),
                Err(e) => {
                    log::error!("❌ Fetch failed: {}", e);
                    state.set(FetchState::Error(e));
                }
            }
        });
    }
}

#[hook]
pub fn use_collection<T: 'static>() -> UseCollectionHandle<T> {
    let state = use_state(|| FetchState::Idle);
    let seq = use_mut_ref(RequestSequencer::default);
    UseCollectionHandle { state, seq }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_commits() {
        let mut seq = RequestSequencer::default();
        let first = seq.issue();
        let second = seq.issue();

        // The response for the abandoned first fetch must be dropped even
        // if it resolves after the second one was issued.
        assert!(!seq.is_latest(first));
        assert!(seq.is_latest(second));

        let third = seq.issue();
        assert!(!seq.is_latest(second));
        assert!(seq.is_latest(third));
    }

    #[test]
    fn loading_state_is_detectable() {
        assert!(FetchState::<u32>::Loading.is_loading());
        assert!(!FetchState::<u32>::Idle.is_loading());
        assert!(!FetchState::Loaded(vec![1u32]).is_loading());
    }
}
