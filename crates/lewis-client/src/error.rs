//! API client error types.

use lewis_core::ListingKind;
use thiserror::Error;

/// Errors that can occur when talking to the 1ewis API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, or the body itself.
        message: String,
    },

    /// A single-item endpoint answered 404.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: ListingKind, id: String },

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}

impl ApiError {
    /// Whether retrying the same request later may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Http(_) | Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::NotFound { .. } | Self::Parse(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        let err = ApiError::Api {
            status: 502,
            message: "bad gateway".into(),
        };
        assert!(err.is_transient());
        assert!(!ApiError::Parse("eof".into()).is_transient());
        assert!(
            !ApiError::Api {
                status: 400,
                message: "captcha failed".into()
            }
            .is_transient()
        );
    }

    #[test]
    fn not_found_names_the_record() {
        let err = ApiError::NotFound {
            kind: ListingKind::Guides,
            id: "wallets-101".into(),
        };
        assert_eq!(err.to_string(), "guides 'wallets-101' not found");
    }
}
