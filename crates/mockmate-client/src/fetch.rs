//! Explicit asynchronous queries with cancellation.
//!
//! A view that loads data starts a [`Query`] (or loads through a
//! [`QuerySlot`]) and abandons it when it goes away. Results that arrive
//! after abandonment are dropped without error and never reach the view's
//! state.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

/// A call running on the tokio runtime whose result can be abandoned.
pub struct Query<T> {
    cancel: CancellationToken,
    rx: oneshot::Receiver<T>,
}

impl<T: Send + 'static> Query<T> {
    /// Spawns `future`; it is dropped as soon as the query is abandoned.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::spawn_with(CancellationToken::new(), future)
    }

    /// Like [`Query::spawn`], tied to an existing token.
    pub fn spawn_with<F>(cancel: CancellationToken, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let task_cancel = cancel.clone();
        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = task_cancel.cancelled() => {}
                output = future => {
                    if !task_cancel.is_cancelled() {
                        // Receiver may already be gone; that is an abandonment too.
                        let _ = tx.send(output);
                    }
                }
            }
        });
        Self { cancel, rx }
    }
}

impl<T> Query<T> {
    /// Abandons the query. Idempotent.
    pub fn abandon(&self) {
        self.cancel.cancel();
    }

    pub fn is_abandoned(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Waits for the result; `None` if the query was abandoned first.
    pub async fn wait(self) -> Option<T> {
        let Self { cancel, rx } = self;
        tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            output = rx => output.ok(),
        }
    }
}

/// Proof that a load was started for a particular [`QuerySlot`] generation.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: u64,
    cancel: CancellationToken,
}

impl Ticket {
    pub fn is_abandoned(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

struct SlotState<T> {
    generation: u64,
    in_flight: Option<CancellationToken>,
    value: Option<T>,
}

/// Latest accepted result for one view.
///
/// Starting a new load supersedes the previous one, and only the newest,
/// non-abandoned load may write the slot.
pub struct QuerySlot<T> {
    state: Mutex<SlotState<T>>,
}

impl<T> Default for QuerySlot<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(SlotState {
                generation: 0,
                in_flight: None,
                value: None,
            }),
        }
    }
}

impl<T> QuerySlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load, abandoning any load still in flight.
    pub fn begin(&self) -> Ticket {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = state.in_flight.take() {
            previous.cancel();
        }
        state.generation += 1;
        let cancel = CancellationToken::new();
        state.in_flight = Some(cancel.clone());
        Ticket {
            generation: state.generation,
            cancel,
        }
    }

    /// Stores `value` if `ticket` is still the current, live load.
    /// Returns whether the value was accepted.
    pub fn accept(&self, ticket: &Ticket, value: T) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if ticket.is_abandoned() || ticket.generation != state.generation {
            return false;
        }
        state.in_flight = None;
        state.value = Some(value);
        true
    }

    /// Abandons the load in flight, if any. The stored value is kept.
    pub fn abandon(&self) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cancel) = state.in_flight.take() {
            cancel.cancel();
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .in_flight
            .is_some()
    }

    /// Runs `future` as a new load of this slot. Returns whether its result
    /// was stored.
    pub async fn load<F>(&self, future: F) -> bool
    where
        F: Future<Output = T>,
    {
        let ticket = self.begin();
        let output = tokio::select! {
            biased;
            () = ticket.cancel.cancelled() => return false,
            output = future => output,
        };
        self.accept(&ticket, output)
    }
}

impl<T: Clone> QuerySlot<T> {
    pub fn latest(&self) -> Option<T> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .value
            .clone()
    }
}
