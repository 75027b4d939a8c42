//! Filter fields and sort columns for the API records.

use std::cmp::Ordering;
use std::str::FromStr;

use lewis_core::entities::{Article, Guide, Question, SearchHit, Token};

use crate::error::FeedError;
use crate::filter::Searchable;
use crate::sort::{Sortable, compare_optional_f64, compare_text};

macro_rules! columns {
    ($name:ident, $listing:literal, { $($variant:ident => [$($alias:literal),+]),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const NAMES: &'static str = concat!($($( $alias, " ", )+)+);
        }

        impl FromStr for $name {
            type Err = FeedError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($($alias)|+ => Ok(Self::$variant),)+
                    other => Err(FeedError::UnknownColumn {
                        listing: $listing,
                        column: other.to_string(),
                        expected: Self::NAMES,
                    }),
                }
            }
        }
    };
}

columns!(TokenColumn, "tokens", {
    Symbol => ["symbol"],
    Name => ["name"],
    Price => ["price", "price_usd"],
    Change24h => ["change", "change_24h"],
    MarketCap => ["market_cap", "mcap"],
    Volume24h => ["volume", "volume_24h"],
});

columns!(ArticleColumn, "news", {
    Title => ["title"],
    Source => ["source"],
    Published => ["published", "date"],
});

columns!(QuestionColumn, "questions", {
    Title => ["title"],
    Answers => ["answers", "answer_count"],
    Created => ["created", "date"],
});

columns!(GuideColumn, "guides", {
    Title => ["title"],
    Category => ["category"],
    Updated => ["updated", "date"],
});

impl Searchable for Token {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.symbol.as_str(), self.name.as_str()]
    }
}

impl Sortable<TokenColumn> for Token {
    fn compare_by(&self, other: &Self, column: TokenColumn) -> Ordering {
        match column {
            TokenColumn::Symbol => compare_text(&self.symbol, &other.symbol),
            TokenColumn::Name => compare_text(&self.name, &other.name),
            TokenColumn::Price => compare_optional_f64(self.price_usd, other.price_usd),
            TokenColumn::Change24h => compare_optional_f64(self.change_24h, other.change_24h),
            TokenColumn::MarketCap => compare_optional_f64(self.market_cap, other.market_cap),
            TokenColumn::Volume24h => compare_optional_f64(self.volume_24h, other.volume_24h),
        }
    }
}

impl Searchable for Article {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.summary.as_deref());
        fields.extend(self.source.as_deref());
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Sortable<ArticleColumn> for Article {
    fn compare_by(&self, other: &Self, column: ArticleColumn) -> Ordering {
        match column {
            ArticleColumn::Title => compare_text(&self.title, &other.title),
            ArticleColumn::Source => compare_text(
                self.source.as_deref().unwrap_or_default(),
                other.source.as_deref().unwrap_or_default(),
            ),
            ArticleColumn::Published => self.published_at.cmp(&other.published_at),
        }
    }
}

impl Searchable for Question {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.body.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

impl Sortable<QuestionColumn> for Question {
    fn compare_by(&self, other: &Self, column: QuestionColumn) -> Ordering {
        match column {
            QuestionColumn::Title => compare_text(&self.title, &other.title),
            QuestionColumn::Answers => self.answer_count.cmp(&other.answer_count),
            QuestionColumn::Created => self.created_at.cmp(&other.created_at),
        }
    }
}

impl Searchable for Guide {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.summary.as_deref());
        fields.extend(self.category.as_deref());
        fields
    }
}

impl Sortable<GuideColumn> for Guide {
    fn compare_by(&self, other: &Self, column: GuideColumn) -> Ordering {
        match column {
            GuideColumn::Title => compare_text(&self.title, &other.title),
            GuideColumn::Category => compare_text(
                self.category.as_deref().unwrap_or_default(),
                other.category.as_deref().unwrap_or_default(),
            ),
            GuideColumn::Updated => self.updated_at.cmp(&other.updated_at),
        }
    }
}

impl Searchable for SearchHit {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.snippet.as_deref());
        fields
    }
}
