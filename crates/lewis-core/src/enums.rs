//! Listing kinds and search hit kinds.
//!
//! All enums use `snake_case` serialization. [`ListingKind`] also carries the
//! wire names each list endpoint uses, since the API is not uniform about
//! cursor parameters or envelope fields.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ListingKind
// ---------------------------------------------------------------------------

/// A paginated listing served by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Tokens,
    News,
    Questions,
    Guides,
}

impl ListingKind {
    pub const ALL: [Self; 4] = [Self::Tokens, Self::News, Self::Questions, Self::Guides];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tokens => "tokens",
            Self::News => "news",
            Self::Questions => "questions",
            Self::Guides => "guides",
        }
    }

    /// Path segment of the list and single-item endpoints.
    #[must_use]
    pub const fn path(self) -> &'static str {
        self.as_str()
    }

    /// Query parameter carrying the cursor on list requests.
    #[must_use]
    pub const fn cursor_param(self) -> &'static str {
        match self {
            Self::Tokens | Self::Guides => "nextToken",
            Self::News => "token",
            Self::Questions => "startKey",
        }
    }

    /// Envelope field holding the page items.
    #[must_use]
    pub const fn items_field(self) -> &'static str {
        match self {
            Self::Tokens => "items",
            Self::News => "articles",
            Self::Questions => "questions",
            Self::Guides => "guides",
        }
    }

    /// Envelope field holding the next cursor.
    #[must_use]
    pub const fn next_cursor_field(self) -> &'static str {
        match self {
            Self::Tokens | Self::Guides => "nextToken",
            Self::News => "nextPageToken",
            Self::Questions => "nextPageKey",
        }
    }

    /// Whether the endpoint honours a free-text `query` parameter.
    #[must_use]
    pub const fn supports_query(self) -> bool {
        !matches!(self, Self::Guides)
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tokens" | "token" => Ok(Self::Tokens),
            "news" | "articles" | "article" => Ok(Self::News),
            "questions" | "question" | "qa" => Ok(Self::Questions),
            "guides" | "guide" => Ok(Self::Guides),
            other => Err(CoreError::UnknownListing(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchHitKind
// ---------------------------------------------------------------------------

/// Record type a site-wide search hit points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchHitKind {
    Token,
    Article,
    Question,
    Guide,
    Exchange,
    #[serde(other)]
    Other,
}

impl SearchHitKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Article => "article",
            Self::Question => "question",
            Self::Guide => "guide",
            Self::Exchange => "exchange",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SearchHitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
