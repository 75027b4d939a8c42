//! # lewis-feed
//!
//! Listing logic shared by every paginated view of the 1ewis API.
//!
//! - [`Paginator`]: forward/backward navigation over opaque cursors with a
//!   history stack. Going back always re-fetches.
//! - [`filter`], [`sort`], [`LocalTable`]: case-insensitive substring filter,
//!   stable column sort, and a page window over data that is already loaded.
//!   These never stand in for server-side search.
//! - [`SearchDebouncer`]: search-as-you-type with a single pending timer and
//!   last-request-wins publication.
//! - [`Resource`] and [`Sequencer`]: the idle/loading/ready/failed state of
//!   an async fetch, ignoring completions that are no longer current.
//! - [`ViewTracker`]: logs a record view at most once per session.
//!
//! Transport lives elsewhere: sources are reached through [`PageSource`],
//! [`SearchSource`] and [`AnalyticsSink`].

pub mod columns;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod paginator;
pub mod resource;
pub mod sort;
pub mod source;
pub mod table;
pub mod tracking;

pub use debounce::{SearchDebouncer, SearchSnapshot};
pub use error::FeedError;
pub use filter::Searchable;
pub use paginator::Paginator;
pub use resource::{Resource, ResourceCell, Sequencer, Ticket};
pub use sort::{SortDirection, SortState, Sortable};
pub use source::{AnalyticsSink, PageSource, SearchSource};
pub use table::LocalTable;
pub use tracking::{ViewTracker, needs_logging};
