//! Cursor paginator with a history stack.
//!
//! List endpoints only hand out forward cursors, so the paginator remembers
//! the cursor of every page it left behind. Backward navigation pops that
//! history and re-requests the page; pages are never cached.
//!
//! ```text
//! page 1 (cursor None)  --next-->  history [None]            current c1
//! page 2 (cursor c1)    --next-->  history [None, c1]        current c2
//! page 3 (cursor c2)    --prev-->  history [None]            current c1
//! ```
//!
//! A failed fetch changes nothing: the displayed page, cursor, history and
//! filters stay exactly as they were, so the caller can offer a retry.

use lewis_core::{Cursor, ListFilters, Page};

use crate::source::PageSource;

pub struct Paginator<S: PageSource> {
    source: S,
    filters: ListFilters,
    current: Option<Cursor>,
    history: Vec<Option<Cursor>>,
    page: Option<Page<S::Item>>,
}

impl<S: PageSource> Paginator<S> {
    /// Create a paginator. Nothing is fetched until [`Self::load`].
    pub const fn new(source: S, filters: ListFilters) -> Self {
        Self {
            source,
            filters,
            current: None,
            history: Vec::new(),
            page: None,
        }
    }

    /// Fetch the first page under the current filters, dropping any history.
    ///
    /// # Errors
    ///
    /// Returns the source error; state is left untouched.
    pub async fn load(&mut self) -> Result<(), S::Error> {
        tracing::debug!(limit = self.filters.limit, "loading first page");
        let page = self.source.fetch_page(&self.filters, None).await?;
        self.current = None;
        self.history.clear();
        self.page = Some(page);
        Ok(())
    }

    /// Advance to the next page.
    ///
    /// Returns `Ok(false)` without a request when there is no next page.
    ///
    /// # Errors
    ///
    /// Returns the source error; state is left untouched.
    pub async fn next(&mut self) -> Result<bool, S::Error> {
        let Some(next) = self.page.as_ref().and_then(|page| page.next_cursor.clone()) else {
            return Ok(false);
        };

        tracing::debug!(from_page = self.page_number(), "fetching next page");
        let page = self.source.fetch_page(&self.filters, Some(&next)).await?;

        let left = std::mem::replace(&mut self.current, Some(next));
        self.history.push(left);
        self.page = Some(page);
        Ok(true)
    }

    /// Go back one page by re-requesting the cursor it was loaded with.
    ///
    /// Returns `Ok(false)` without a request on the first page.
    ///
    /// # Errors
    ///
    /// Returns the source error; the history entry is only popped on success.
    pub async fn previous(&mut self) -> Result<bool, S::Error> {
        let Some(target) = self.history.last().cloned() else {
            return Ok(false);
        };

        tracing::debug!(from_page = self.page_number(), "re-fetching previous page");
        let page = self.source.fetch_page(&self.filters, target.as_ref()).await?;

        self.history.pop();
        self.current = target;
        self.page = Some(page);
        Ok(true)
    }

    /// Replace the filters and return to the first page.
    ///
    /// Cursors issued under the old filters are discarded with the history.
    /// Equal filters on an already loaded paginator are a no-op and return
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns the source error; the old filters and page stay in place.
    pub async fn set_filters(&mut self, filters: ListFilters) -> Result<bool, S::Error> {
        if filters == self.filters && self.page.is_some() {
            return Ok(false);
        }

        tracing::debug!(?filters, "filters changed, resetting to first page");
        let page = self.source.fetch_page(&filters, None).await?;

        self.filters = filters;
        self.current = None;
        self.history.clear();
        self.page = Some(page);
        Ok(true)
    }

    /// Re-request the page currently displayed.
    ///
    /// # Errors
    ///
    /// Returns the source error; the stale page stays displayed.
    pub async fn retry(&mut self) -> Result<(), S::Error> {
        let page = self
            .source
            .fetch_page(&self.filters, self.current.as_ref())
            .await?;
        self.page = Some(page);
        Ok(())
    }

    /// Items of the displayed page (empty before the first load).
    pub fn items(&self) -> &[S::Item] {
        self.page.as_ref().map_or(&[], |page| page.items.as_slice())
    }

    /// The displayed page, if one has loaded.
    pub const fn page(&self) -> Option<&Page<S::Item>> {
        self.page.as_ref()
    }

    /// One-based number of the displayed page.
    pub fn page_number(&self) -> usize {
        self.history.len() + 1
    }

    pub fn has_next(&self) -> bool {
        self.page.as_ref().is_some_and(|page| page.next_cursor.is_some())
    }

    pub fn has_previous(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether a page has been loaded at all.
    pub const fn is_loaded(&self) -> bool {
        self.page.is_some()
    }

    pub fn total(&self) -> Option<u64> {
        self.page.as_ref().and_then(|page| page.total)
    }

    pub const fn filters(&self) -> &ListFilters {
        &self.filters
    }

    pub const fn source(&self) -> &S {
        &self.source
    }
}
