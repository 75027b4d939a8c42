//! Listing and search behaviour.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_page_size() -> u32 {
    20
}

const fn default_debounce_ms() -> u64 {
    300
}

const fn default_search_limit() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// Items requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Quiet period before search-as-you-type fires, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Maximum hits requested per search.
    #[serde(default = "default_search_limit")]
    pub search_limit: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce_ms(),
            search_limit: default_search_limit(),
        }
    }
}

impl ListingConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing.page_size".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.search_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "listing.search_limit".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
