//! Client-side checks run before anything is submitted.
//!
//! These catch what can be caught locally (malformed email, missing CAPTCHA
//! token, empty text). The server still has the final say.

use crate::errors::ValidationError;

/// Longest comment or answer body accepted client-side.
pub const MAX_BODY_CHARS: usize = 5_000;

/// Longest question title accepted client-side.
pub const MAX_TITLE_CHARS: usize = 200;

/// Check the shape of an email address: one `@`, a non-empty local part, a
/// dotted domain, and no whitespace.
///
/// # Errors
///
/// Returns a [`ValidationError`] for field `email` describing the problem.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::new("email", "email is required"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::new("email", "email must not contain spaces"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::new("email", "email must contain '@'"));
    };
    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::new("email", "email is malformed"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(ValidationError::new("email", "email domain is malformed"));
    }
    Ok(())
}

/// Require a CAPTCHA verification token.
///
/// # Errors
///
/// Returns a [`ValidationError`] for field `captcha` when the token is blank.
pub fn require_captcha(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        return Err(ValidationError::new(
            "captcha",
            "complete the CAPTCHA before submitting",
        ));
    }
    Ok(())
}

/// Require non-blank text no longer than `max_chars` characters.
///
/// # Errors
///
/// Returns a [`ValidationError`] for `field` when the text is blank or too long.
pub fn require_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, format!("{field} is required")));
    }
    let count = trimmed.chars().count();
    if count > max_chars {
        return Err(ValidationError::new(
            field,
            format!("{field} is {count} characters; the limit is {max_chars}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("reader@example.com")]
    #[case("first.last+news@mail.example.co.uk")]
    #[case("  padded@example.org  ")]
    fn accepts_valid_emails(#[case] email: &str) {
        assert!(validate_email(email).is_ok());
    }

    #[rstest]
    #[case("", "email is required")]
    #[case("no-at-sign.example.com", "email must contain '@'")]
    #[case("@example.com", "email is malformed")]
    #[case("a@b@example.com", "email is malformed")]
    #[case("reader@localhost", "email domain is malformed")]
    #[case("reader@example..com", "email domain is malformed")]
    #[case("read er@example.com", "email must not contain spaces")]
    fn rejects_malformed_emails(#[case] email: &str, #[case] reason: &str) {
        let err = validate_email(email).unwrap_err();
        assert_eq!(err.field, "email");
        assert_eq!(err.reason, reason);
    }

    #[test]
    fn captcha_token_required() {
        assert_eq!(require_captcha("  ").unwrap_err().field, "captcha");
        assert!(require_captcha("03AGdBq27").is_ok());
    }

    #[test]
    fn text_length_is_counted_in_chars() {
        assert!(require_text("body", "ééé", 3).is_ok());
        let err = require_text("body", "éééé", 3).unwrap_err();
        assert_eq!(err.reason, "body is 4 characters; the limit is 3");
        assert_eq!(require_text("title", " ", 10).unwrap_err().reason, "title is required");
    }
}
