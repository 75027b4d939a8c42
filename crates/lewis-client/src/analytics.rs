//! View logging.

use lewis_core::ViewKey;
use lewis_feed::AnalyticsSink;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::check_response;
use crate::{ApiClient, routes};

#[derive(Serialize)]
struct ViewEvent {
    key: String,
}

impl ApiClient {
    /// Record one view of `key`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or is rejected.
    pub async fn record_view(&self, key: &ViewKey) -> Result<(), ApiError> {
        let event = ViewEvent {
            key: key.to_string(),
        };
        let url = routes::views_url(&self.base_url);
        check_response(self.http.post(&url).json(&event).send().await?).await?;
        tracing::debug!(%key, "view logged");
        Ok(())
    }
}

impl AnalyticsSink for ApiClient {
    type Error = ApiError;

    async fn log_view(&self, key: &ViewKey) -> Result<(), ApiError> {
        self.record_view(key).await
    }
}
