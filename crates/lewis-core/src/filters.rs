//! Server-side list filters.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default page size for list requests.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Filters sent with every list request.
///
/// Any difference between two filter sets (page size included) counts as a
/// filter change: cursors issued under one set are never valid under another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ListFilters {
    pub limit: u32,
    pub query: Option<String>,
    pub tag: Option<String>,
    pub category: Option<String>,
}

impl Default for ListFilters {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            query: None,
            tag: None,
            category: None,
        }
    }
}

impl ListFilters {
    #[must_use]
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Set the free-text query. Blank text clears it.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = non_blank(query.into());
        self
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = non_blank(tag.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    /// Filter pairs to append to a list request, in a stable order.
    ///
    /// The cursor is not included; it travels under a listing-specific name.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("limit", self.limit.to_string())];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(tag) = &self.tag {
            pairs.push(("tag", tag.clone()));
        }
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
