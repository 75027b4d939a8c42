//! # lewis-core
//!
//! Core types shared across the lewis crates.
//!
//! This crate provides:
//! - Display records for every listing the 1ewis API serves (tokens, news
//!   articles, questions and answers, guides, comments, search hits)
//! - The opaque [`Cursor`] and the [`Page`] envelope returned by list endpoints
//! - [`ListFilters`], the filter set whose change resets pagination
//! - [`ListingKind`] with the per-endpoint wire names
//! - Form drafts and the client-side validation run before any submission
//! - [`ViewKey`], the composite key used for once-per-session view logging
//! - Cross-cutting error types

pub mod cursor;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filters;
pub mod forms;
pub mod identity;
pub mod validation;

pub use cursor::{Cursor, Page};
pub use enums::{ListingKind, SearchHitKind};
pub use errors::{CoreError, ValidationError};
pub use filters::ListFilters;
pub use identity::ViewKey;
