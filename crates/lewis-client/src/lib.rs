//! # lewis-client
//!
//! HTTP client for the 1ewis content API.
//!
//! - List endpoints for tokens, news, questions and guides, decoded into
//!   [`Page`](lewis_core::Page)s whose cursor and envelope names vary per
//!   listing
//! - Single-record endpoints, question answers and article comments
//! - Site-wide search
//! - Write endpoints (comments, questions, answers, mailing list), which only
//!   accept validated [`Submission`](lewis_core::forms::Submission)s
//! - Fire-and-forget view logging
//!
//! [`ApiListing`], [`ApiSearch`] and [`ApiClient`] itself plug the client
//! into the `lewis-feed` source traits.

pub mod analytics;
pub mod listing;
pub mod records;
pub mod routes;
pub mod search;
pub mod submit;

mod envelope;
mod error;
mod http;

pub use error::ApiError;
pub use listing::ApiListing;
pub use search::ApiSearch;

use lewis_config::ApiConfig;

/// HTTP client for the 1ewis API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g. no TLS backend).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url_trimmed().to_string(),
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8787/".into(),
            ..ApiConfig::default()
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8787");
    }

    #[test]
    fn default_config_builds() {
        let client = ApiClient::new(&ApiConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://api.1ewis.com");
    }
}
