//! Data-count collaborator.
//!
//! The pager never fetches listing data itself. It asks a [`CountSource`] how
//! many items match the current filter and tracks the answer as a
//! [`CountState`]. Fetches are request-scoped: a new request cancels the one
//! in flight, and results for superseded requests are dropped.

use std::sync::{Arc, Mutex, PoisonError, Weak};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::CountError;

/// Inputs of a count fetch. Also the de-duplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountRequest {
    pub current_page: u32,
    pub per_page: u32,
    pub search: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_filter: Option<String>,
}

/// What a count source answers. Only `count` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// Progress of the latest count fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CountState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    Pending,
    Ready(u64),
    Failed(CountError),
}

impl CountState {
    /// The resolved count, if any.
    #[must_use]
    pub fn count(&self) -> Option<u64> {
        match self {
            Self::Ready(count) => Some(*count),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Anything that can count the items matching a filter.
#[async_trait]
pub trait CountSource: Send + Sync {
    /// Count the items matching `request`.
    async fn count(&self, request: &CountRequest) -> Result<CountResponse>;
}

#[derive(Default)]
struct Inflight {
    request: Option<CountRequest>,
    token: Option<CancellationToken>,
    generation: u64,
}

struct Shared {
    inflight: Mutex<Inflight>,
    state: watch::Sender<CountState>,
}

impl Shared {
    /// Publish `state` unless a newer request has replaced `generation`.
    fn publish(&self, generation: u64, state: CountState) {
        let inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        if inflight.generation == generation {
            self.state.send_replace(state);
        } else {
            debug!(generation, "Dropping count for superseded request");
        }
    }
}

/// Request-scoped count fetcher with change notification.
///
/// Cloning yields another handle onto the same fetch state.
#[derive(Clone)]
pub struct CountQuery {
    source: Arc<dyn CountSource>,
    timeout: Duration,
    shared: Arc<Shared>,
}

impl CountQuery {
    #[must_use]
    pub fn new(source: Arc<dyn CountSource>, timeout: Duration) -> Self {
        let (state, _) = watch::channel(CountState::Idle);
        Self {
            source,
            timeout,
            shared: Arc::new(Shared {
                inflight: Mutex::new(Inflight::default()),
                state,
            }),
        }
    }

    /// Current state of the latest request.
    #[must_use]
    pub fn state(&self) -> CountState {
        self.shared.state.borrow().clone()
    }

    /// Receiver that is notified whenever the state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CountState> {
        self.shared.state.subscribe()
    }

    /// Report the state for `request`, starting a fetch if it differs from
    /// the last one observed.
    ///
    /// Must be called from within a tokio runtime to make progress; without
    /// one the state stays `Pending` until a later call made inside a runtime
    /// starts the fetch.
    pub fn observe(&self, request: &CountRequest) -> CountState {
        let mut inflight = self
            .shared
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if inflight.request.as_ref() == Some(request) {
            return self.state();
        }

        if let Some(previous) = inflight.token.take() {
            previous.cancel();
        }
        inflight.generation += 1;
        let generation = inflight.generation;
        self.shared.state.send_replace(CountState::Pending);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let token = CancellationToken::new();
                inflight.request = Some(request.clone());
                inflight.token = Some(token.clone());
                handle.spawn(run_fetch(
                    Arc::clone(&self.source),
                    Arc::downgrade(&self.shared),
                    request.clone(),
                    self.timeout,
                    generation,
                    token,
                ));
                debug!(generation, search = %request.search, "Started count fetch");
            }
            Err(_) => {
                // Nothing was started, so the next observe must try again.
                inflight.request = None;
                warn!("No async runtime available, count stays pending");
            }
        }

        CountState::Pending
    }

    /// Cancel the fetch in flight, if any. The state is left as it was.
    pub fn cancel(&self) {
        let mut inflight = self
            .shared
            .inflight
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = inflight.token.take() {
            token.cancel();
        }
    }
}

// The fetch task only holds a weak handle, so dropping the last query
// cancels whatever is still in flight.
impl Drop for Shared {
    fn drop(&mut self) {
        let inflight = self.inflight.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(token) = inflight.token.take() {
            token.cancel();
        }
    }
}

async fn run_fetch(
    source: Arc<dyn CountSource>,
    shared: Weak<Shared>,
    request: CountRequest,
    timeout: Duration,
    generation: u64,
    token: CancellationToken,
) {
    tokio::select! {
        () = token.cancelled() => {
            debug!(generation, "Count fetch cancelled");
        }
        result = tokio::time::timeout(timeout, source.count(&request)) => {
            let state = match result {
                Ok(Ok(response)) => CountState::Ready(response.count),
                Ok(Err(e)) => {
                    warn!("Count fetch failed: {e:#}");
                    CountState::Failed(CountError::Source(format!("{e:#}")))
                }
                Err(_) => {
                    warn!(timeout_secs = timeout.as_secs(), "Count fetch timed out");
                    CountState::Failed(CountError::Timeout(timeout))
                }
            };
            if let Some(shared) = shared.upgrade() {
                shared.publish(generation, state);
            }
        }
    }
}
