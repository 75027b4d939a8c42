use std::str::FromStr;

use lewis_core::ListingKind;
use lewis_core::entities::{Article, Guide, Question, Token};
use lewis_feed::columns::{ArticleColumn, GuideColumn, QuestionColumn, TokenColumn};
use lewis_feed::{FeedError, Searchable};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record served by one of the paginated listings.
///
/// Generic handlers also bound `T: Sortable<T::Column>`; it cannot be a
/// supertrait since it names the associated type.
pub trait ListingRecord: DeserializeOwned + Serialize + Clone + Send + Searchable {
    type Column: FromStr<Err = FeedError> + Copy + PartialEq;
    const KIND: ListingKind;
}

impl ListingRecord for Token {
    type Column = TokenColumn;
    const KIND: ListingKind = ListingKind::Tokens;
}

impl ListingRecord for Article {
    type Column = ArticleColumn;
    const KIND: ListingKind = ListingKind::News;
}

impl ListingRecord for Question {
    type Column = QuestionColumn;
    const KIND: ListingKind = ListingKind::Questions;
}

impl ListingRecord for Guide {
    type Column = GuideColumn;
    const KIND: ListingKind = ListingKind::Guides;
}

/// Call a generic async handler with the record type of a runtime kind.
macro_rules! with_record {
    ($kind:expr, $handler:ident ( $($arg:expr),* $(,)? )) => {
        match $kind {
            lewis_core::ListingKind::Tokens => {
                $handler::<lewis_core::entities::Token>($($arg),*).await
            }
            lewis_core::ListingKind::News => {
                $handler::<lewis_core::entities::Article>($($arg),*).await
            }
            lewis_core::ListingKind::Questions => {
                $handler::<lewis_core::entities::Question>($($arg),*).await
            }
            lewis_core::ListingKind::Guides => {
                $handler::<lewis_core::entities::Guide>($($arg),*).await
            }
        }
    };
}

pub(crate) use with_record;
