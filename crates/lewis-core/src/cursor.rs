//! Continuation cursors and the page envelope.
//!
//! A [`Cursor`] is issued by the API and sent back verbatim to resume a
//! listing. The client never inspects or builds one: the only way to obtain a
//! cursor is from a response (deserialization, or [`Cursor::issued`] when an
//! adapter lifts a token out of a loosely shaped envelope).

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opaque continuation token returned by a list endpoint.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Cursor(String);

impl Cursor {
    /// Wrap a token exactly as the server issued it.
    ///
    /// Returns `None` for an empty token, which list endpoints use
    /// interchangeably with `null` to mean "no further pages".
    #[must_use]
    pub fn issued(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.is_empty() {
            None
        } else {
            Some(Self(token))
        }
    }

    /// The token to send back on the next request.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens can be long base64 blobs; keep debug output readable.
impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.chars().count() > 16 {
            let head: String = self.0.chars().take(16).collect();
            write!(f, "Cursor({head}…)")
        } else {
            write!(f, "Cursor({})", self.0)
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Resume point for the following page. `None` on the last page.
    pub next_cursor: Option<Cursor>,
    /// Total item count, when the endpoint reports one.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, next_cursor: Option<Cursor>) -> Self {
        Self {
            items,
            next_cursor,
            total: None,
        }
    }

    #[must_use]
    pub const fn with_total(mut self, total: Option<u64>) -> Self {
        self.total = total;
        self
    }

    /// An empty last page.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform every item while keeping the cursor and total.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next_cursor: self.next_cursor,
            total: self.total,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
