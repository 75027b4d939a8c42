//! At-most-once view logging per session.
//!
//! The set of already-logged keys is an explicit value owned by the caller,
//! so the "once per resource" guarantee is a pure function of that set.

use std::collections::HashSet;

use lewis_core::ViewKey;

use crate::source::AnalyticsSink;

/// Whether `key` still has to be logged given the keys logged so far.
pub fn needs_logging(logged: &HashSet<ViewKey>, key: &ViewKey) -> bool {
    !logged.contains(key)
}

#[derive(Debug, Default, Clone)]
pub struct ViewTracker {
    logged: HashSet<ViewKey>,
}

impl ViewTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a tracker from keys logged earlier in the session.
    pub fn with_logged(logged: impl IntoIterator<Item = ViewKey>) -> Self {
        Self {
            logged: logged.into_iter().collect(),
        }
    }

    /// Reserve `key`. Returns `false` if it was already logged.
    pub fn claim(&mut self, key: ViewKey) -> bool {
        self.logged.insert(key)
    }

    /// Log a view through `sink` unless `key` was logged before.
    ///
    /// Failures are logged and swallowed; the key stays claimed so a broken
    /// analytics endpoint is not hammered with retries. Returns whether a
    /// call was made.
    pub async fn track<A: AnalyticsSink>(&mut self, sink: &A, key: ViewKey) -> bool {
        if !needs_logging(&self.logged, &key) {
            return false;
        }
        if let Err(error) = sink.log_view(&key).await {
            tracing::warn!(%key, %error, "failed to log view");
        }
        self.logged.insert(key);
        true
    }

    pub fn logged(&self) -> &HashSet<ViewKey> {
        &self.logged
    }
}
