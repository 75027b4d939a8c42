//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// A sort column name did not match any column of the listing.
    #[error("unknown {listing} column '{column}' (expected one of: {expected})")]
    UnknownColumn {
        listing: &'static str,
        column: String,
        expected: &'static str,
    },
}
