//! State of an async fetch, with stale completions ignored.
//!
//! Every fetch takes a [`Ticket`] from a [`Sequencer`]. Only a completion
//! carrying the most recently issued ticket may change the state, so a slow
//! early response can never overwrite a faster later one.

use std::fmt::Display;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

/// Idle / loading / ready / failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource<T> {
    Idle,
    Loading,
    Ready(T),
    /// The fetch failed; the message is meant for display next to a retry.
    Failed(String),
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Resource<T> {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Self::Idle => Resource::Idle,
            Self::Loading => Resource::Loading,
            Self::Ready(value) => Resource::Ready(f(value)),
            Self::Failed(message) => Resource::Failed(message),
        }
    }

    /// Settle from a fetch result.
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => Self::Failed(error.to_string()),
        }
    }
}

impl<T> Resource<Vec<T>> {
    /// A successful fetch that returned nothing. Distinct from a failure.
    pub fn is_empty_result(&self) -> bool {
        matches!(self, Self::Ready(items) if items.is_empty())
    }

    /// Append an item created locally (a just-posted comment) without a
    /// refetch. Ignored unless the list is loaded.
    pub fn push_local(&mut self, item: T) -> bool {
        match self {
            Self::Ready(items) => {
                items.push(item);
                true
            }
            _ => false,
        }
    }
}

/// Proof of which request a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Hands out increasing tickets and remembers the latest.
///
/// Thread-safe so in-flight tasks can check currency without a lock.
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: AtomicU64,
}

impl Sequencer {
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issue a ticket, making every earlier ticket stale.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Make every outstanding ticket stale without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

/// A [`Resource`] guarded by a [`Sequencer`].
#[derive(Debug)]
pub struct ResourceCell<T> {
    state: Resource<T>,
    sequencer: Sequencer,
}

impl<T> Default for ResourceCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceCell<T> {
    pub const fn new() -> Self {
        Self {
            state: Resource::Idle,
            sequencer: Sequencer::new(),
        }
    }

    pub const fn state(&self) -> &Resource<T> {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut Resource<T> {
        &mut self.state
    }

    /// Mark a fetch as started.
    pub fn begin(&mut self) -> Ticket {
        self.state = Resource::Loading;
        self.sequencer.issue()
    }

    /// Apply a completion if `ticket` is still current.
    ///
    /// Returns whether the state changed.
    pub fn complete<E: Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(?ticket, "discarding stale completion");
            return false;
        }
        self.state = Resource::from_result(result);
        true
    }

    /// Return to idle, dropping whatever is in flight.
    pub fn reset(&mut self) {
        self.sequencer.invalidate();
        self.state = Resource::Idle;
    }

    /// Run `fetch` to completion and settle the state from it.
    pub async fn run<F, E>(&mut self, fetch: F) -> &Resource<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Display,
    {
        let ticket = self.begin();
        let result = fetch.await;
        self.complete(ticket, result);
        &self.state
    }
}
