//! Cross-cutting error types.
//!
//! Transport errors (`ApiError`) and configuration errors (`ConfigError`) live
//! in their own crates. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while interpreting user-supplied names.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A listing name did not match any known listing.
    #[error("Unknown listing: {0}")]
    UnknownListing(String),
}

/// A form field failed client-side validation.
///
/// Carries the field name so callers can surface the message next to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ListingKind;

    #[test]
    fn unknown_listing_names_the_input() {
        let err = "exchanges".parse::<ListingKind>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown listing: exchanges");
    }

    #[test]
    fn validation_error_leads_with_field() {
        let err = ValidationError::new("email", "must contain '@'");
        assert_eq!(err.to_string(), "email: must contain '@'");
    }
}
