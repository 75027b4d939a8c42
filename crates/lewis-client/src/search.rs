//! Site-wide search.

use std::sync::Arc;

use lewis_core::entities::SearchHit;
use lewis_feed::SearchSource;
use serde_json::Value;

use crate::envelope::parse_list;
use crate::error::ApiError;
use crate::http::read_json;
use crate::{ApiClient, routes};

impl ApiClient {
    /// Search every content type for `query`.
    ///
    /// Blank queries return no hits without a request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<SearchHit>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let url = routes::search_url(&self.base_url, query, limit);
        tracing::debug!(query, limit, "search request");
        let body: Value = read_json(self.http.get(&url).send().await?).await?;
        parse_list("items", body)
    }
}

/// Search endpoint with a fixed hit limit, shareable with a debouncer.
#[derive(Debug, Clone)]
pub struct ApiSearch {
    client: ApiClient,
    limit: u32,
}

impl ApiSearch {
    #[must_use]
    pub const fn new(client: ApiClient, limit: u32) -> Self {
        Self { client, limit }
    }

    /// Wrap for handing to a [`lewis_feed::SearchDebouncer`].
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl SearchSource for ApiSearch {
    type Hit = SearchHit;
    type Error = ApiError;

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, ApiError> {
        self.client.search(query, self.limit).await
    }
}

#[cfg(test)]
mod tests {
    use lewis_config::ApiConfig;
    use lewis_core::SearchHitKind;
    use lewis_core::entities::SearchHit;
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "items": [
            { "kind": "token", "id": "solana", "title": "Solana (SOL)" },
            { "kind": "article", "id": "4821", "title": "Solana outage recap", "snippet": "Validators halted…" },
            { "kind": "podcast", "id": "p9", "title": "Weekly show" }
        ]
    }"#;

    #[test]
    fn parse_search_response() {
        let body = serde_json::from_str(FIXTURE).unwrap();
        let hits: Vec<SearchHit> = parse_list("items", body).unwrap();
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].kind, SearchHitKind::Token);
        assert_eq!(hits[1].snippet.as_deref(), Some("Validators halted…"));
        assert_eq!(hits[2].kind, SearchHitKind::Other);
    }

    #[tokio::test]
    async fn blank_query_sends_nothing() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:9".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert!(client.search("   ", 10).await.unwrap().is_empty());
    }
}
