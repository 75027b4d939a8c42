//! Search-as-you-type with a single pending timer.
//!
//! Each input cancels the pending timer and arms a new one, so a burst of
//! keystrokes shorter than the delay produces exactly one request, for the
//! final text. Blank input clears the results on the spot and issues nothing.
//!
//! A request that has already been sent is not cancelled by later input; its
//! response is dropped on arrival instead if a newer input exists. Results
//! are published on a [`watch`] channel as [`SearchSnapshot`]s, each paired
//! with the query that produced it.
//!
//! Must be driven from within a Tokio runtime.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::resource::{Resource, Sequencer, Ticket};
use crate::source::SearchSource;

/// Quiet period used by the site's search boxes.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// A published search state and the query it belongs to.
///
/// The query is empty while idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSnapshot<H> {
    pub query: String,
    pub results: Resource<Vec<H>>,
}

impl<H> SearchSnapshot<H> {
    pub const fn idle() -> Self {
        Self {
            query: String::new(),
            results: Resource::Idle,
        }
    }

    fn new(query: &str, results: Resource<Vec<H>>) -> Self {
        Self {
            query: query.to_string(),
            results,
        }
    }
}

type Snapshot<S> = SearchSnapshot<<S as SearchSource>::Hit>;

struct Pending {
    handle: JoinHandle<()>,
    /// Set once the timer has elapsed and the request is on its way.
    fired: Arc<AtomicBool>,
}

pub struct SearchDebouncer<S: SearchSource> {
    source: Arc<S>,
    delay: Duration,
    sequencer: Arc<Sequencer>,
    results: Arc<watch::Sender<Snapshot<S>>>,
    pending: Option<Pending>,
    in_flight: Vec<JoinHandle<()>>,
}

impl<S: SearchSource> SearchDebouncer<S> {
    pub fn new(source: Arc<S>, delay: Duration) -> Self {
        let (results, _) = watch::channel(SearchSnapshot::idle());
        Self {
            source,
            delay,
            sequencer: Arc::new(Sequencer::new()),
            results: Arc::new(results),
            pending: None,
            in_flight: Vec::new(),
        }
    }

    /// Receive every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<S>> {
        self.results.subscribe()
    }

    /// The latest published state.
    pub fn state(&self) -> Resource<Vec<S::Hit>> {
        self.results.borrow().results.clone()
    }

    /// The latest published snapshot, query included.
    pub fn snapshot(&self) -> Snapshot<S> {
        self.results.borrow().clone()
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Feed the current contents of the search box.
    pub fn input(&mut self, text: &str) {
        self.disarm();
        let ticket = self.sequencer.issue();

        let query = text.trim().to_string();
        if query.is_empty() {
            self.results.send_replace(SearchSnapshot::idle());
            return;
        }

        let fired = Arc::new(AtomicBool::new(false));
        let handle = tokio::spawn(run_search(
            Arc::clone(&self.source),
            Arc::clone(&self.sequencer),
            Arc::clone(&self.results),
            Arc::clone(&fired),
            self.delay,
            ticket,
            query,
        ));
        self.pending = Some(Pending { handle, fired });
    }

    /// Drop the pending timer, ignore any response still in flight and
    /// return to idle.
    pub fn cancel(&mut self) {
        self.disarm();
        self.sequencer.invalidate();
        self.results.send_replace(SearchSnapshot::idle());
    }

    /// Cancel the timer if it has not fired yet; otherwise let the request
    /// finish in the background.
    fn disarm(&mut self) {
        self.in_flight.retain(|handle| !handle.is_finished());
        if let Some(pending) = self.pending.take() {
            if pending.fired.load(Ordering::Acquire) {
                self.in_flight.push(pending.handle);
            } else {
                pending.handle.abort();
            }
        }
    }
}

impl<S: SearchSource> Drop for SearchDebouncer<S> {
    fn drop(&mut self) {
        self.sequencer.invalidate();
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
    }
}

async fn run_search<S: SearchSource>(
    source: Arc<S>,
    sequencer: Arc<Sequencer>,
    results: Arc<watch::Sender<Snapshot<S>>>,
    fired: Arc<AtomicBool>,
    delay: Duration,
    ticket: Ticket,
    query: String,
) {
    tokio::time::sleep(delay).await;
    let loading = SearchSnapshot::new(&query, Resource::Loading);
    let started = publish_if_current(&sequencer, &results, ticket, loading);
    if !started {
        return;
    }
    fired.store(true, Ordering::Release);

    tracing::debug!(%query, "debounce elapsed, searching");
    let outcome = source.search(&query).await;
    let failure = outcome.as_ref().err().map(ToString::to_string);

    let settled = SearchSnapshot::new(&query, Resource::from_result(outcome));
    if !publish_if_current(&sequencer, &results, ticket, settled) {
        tracing::debug!(%query, "discarding stale search response");
        return;
    }
    if let Some(error) = failure {
        tracing::warn!(%query, %error, "search failed");
    }
}

/// Publish `state` only if `ticket` is still the latest.
///
/// The check runs under the channel's lock, so a newer input (which issues
/// its ticket before publishing) can never be overwritten.
fn publish_if_current<T>(
    sequencer: &Sequencer,
    results: &watch::Sender<T>,
    ticket: Ticket,
    state: T,
) -> bool {
    results.send_if_modified(move |current| {
        if !sequencer.is_current(ticket) {
            return false;
        }
        *current = state;
        true
    })
}
