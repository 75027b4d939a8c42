//! Paginated list endpoints.

use std::marker::PhantomData;

use lewis_core::entities::{Article, Guide, Question, Token};
use lewis_core::{Cursor, ListFilters, ListingKind, Page};
use lewis_feed::PageSource;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::parse_page;
use crate::error::ApiError;
use crate::http::read_json;
use crate::{ApiClient, routes};

impl ApiClient {
    /// Fetch one page of `kind` starting at `cursor`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the API returns a
    /// non-success status, or the envelope cannot be decoded.
    pub async fn list<T: DeserializeOwned>(
        &self,
        kind: ListingKind,
        filters: &ListFilters,
        cursor: Option<&Cursor>,
    ) -> Result<Page<T>, ApiError> {
        let url = routes::list_url(&self.base_url, kind, filters, cursor);
        tracing::debug!(listing = %kind, has_cursor = cursor.is_some(), "list request");
        let body: Value = read_json(self.http.get(&url).send().await?).await?;
        parse_page(kind, body)
    }

    /// A [`PageSource`] over the token listing.
    #[must_use]
    pub fn tokens(&self) -> ApiListing<Token> {
        ApiListing::new(self.clone(), ListingKind::Tokens)
    }

    #[must_use]
    pub fn news(&self) -> ApiListing<Article> {
        ApiListing::new(self.clone(), ListingKind::News)
    }

    #[must_use]
    pub fn questions(&self) -> ApiListing<Question> {
        ApiListing::new(self.clone(), ListingKind::Questions)
    }

    #[must_use]
    pub fn guides(&self) -> ApiListing<Guide> {
        ApiListing::new(self.clone(), ListingKind::Guides)
    }
}

/// One listing of the API, typed by its record.
#[derive(Debug, Clone)]
pub struct ApiListing<T> {
    client: ApiClient,
    kind: ListingKind,
    _record: PhantomData<fn() -> T>,
}

impl<T> ApiListing<T> {
    #[must_use]
    pub const fn new(client: ApiClient, kind: ListingKind) -> Self {
        Self {
            client,
            kind,
            _record: PhantomData,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ListingKind {
        self.kind
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl<T: DeserializeOwned + Send> PageSource for ApiListing<T> {
    type Item = T;
    type Error = ApiError;

    async fn fetch_page(
        &self,
        filters: &ListFilters,
        cursor: Option<&Cursor>,
    ) -> Result<Page<T>, ApiError> {
        self.client.list(self.kind, filters, cursor).await
    }
}
