//! Seams between the listing logic and whatever serves the data.

use std::fmt::Display;
use std::future::Future;

use lewis_core::{Cursor, ListFilters, Page, ViewKey};

/// Serves one page of a listing.
pub trait PageSource {
    type Item;
    type Error: Display;

    /// Fetch the page that starts at `cursor` under `filters`.
    ///
    /// `cursor = None` always means the first page.
    fn fetch_page(
        &self,
        filters: &ListFilters,
        cursor: Option<&Cursor>,
    ) -> impl Future<Output = Result<Page<Self::Item>, Self::Error>> + Send;
}

/// Serves remote search results.
pub trait SearchSource: Send + Sync + 'static {
    type Hit: Clone + Send + Sync + 'static;
    type Error: Display + Send + 'static;

    fn search(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Self::Hit>, Self::Error>> + Send;
}

/// Receives fire-and-forget view events.
pub trait AnalyticsSink {
    type Error: Display;

    fn log_view(&self, key: &ViewKey) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
