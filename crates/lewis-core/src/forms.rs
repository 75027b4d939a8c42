//! Form drafts for the write endpoints.
//!
//! A draft is validated locally, then wrapped in a [`Submission`] together
//! with the CAPTCHA token. Only a `Submission` can be sent, so an unvalidated
//! draft never reaches the network.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::validation::{
    MAX_BODY_CHARS, MAX_TITLE_CHARS, require_captcha, require_text, validate_email,
};

/// Longest display name accepted for authors.
const MAX_AUTHOR_CHARS: usize = 60;

/// Maximum number of tags on a question.
const MAX_TAGS: usize = 5;

/// A form body that can check itself before submission.
pub trait Draft: Serialize {
    /// # Errors
    ///
    /// Returns the first failing field.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A new comment under a news article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub article_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub body: String,
}

impl Draft for CommentDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("article_id", &self.article_id, 128)?;
        if let Some(author) = &self.author {
            require_text("author", author, MAX_AUTHOR_CHARS)?;
        }
        require_text("body", &self.body, MAX_BODY_CHARS)
    }
}

/// A new community question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Optional address for answer notifications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Draft for QuestionDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title, MAX_TITLE_CHARS)?;
        require_text("body", &self.body, MAX_BODY_CHARS)?;
        if let Some(author) = &self.author {
            require_text("author", author, MAX_AUTHOR_CHARS)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if self.tags.len() > MAX_TAGS {
            return Err(ValidationError::new(
                "tags",
                format!("at most {MAX_TAGS} tags are allowed"),
            ));
        }
        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(ValidationError::new("tags", "tags must not be blank"));
        }
        Ok(())
    }
}

/// An answer to an existing question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDraft {
    #[serde(skip)]
    pub question_id: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Draft for AnswerDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("question_id", &self.question_id, 128)?;
        if let Some(author) = &self.author {
            require_text("author", author, MAX_AUTHOR_CHARS)?;
        }
        require_text("body", &self.body, MAX_BODY_CHARS)
    }
}

/// A mailing-list signup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Subscription {
    pub email: String,
}

impl Draft for Subscription {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_email(&self.email)
    }
}

/// A validated draft paired with its CAPTCHA verification token.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Submission<D> {
    #[serde(flatten)]
    draft: D,
    captcha_token: String,
}

impl<D: Draft> Submission<D> {
    /// Validate `draft` and the CAPTCHA token.
    ///
    /// # Errors
    ///
    /// Returns the first failing field; the CAPTCHA is checked last so field
    /// errors surface first.
    pub fn new(draft: D, captcha_token: impl Into<String>) -> Result<Self, ValidationError> {
        let captcha_token = captcha_token.into();
        draft.validate()?;
        require_captcha(&captcha_token)?;
        Ok(Self {
            draft,
            captcha_token: captcha_token.trim().to_string(),
        })
    }

    #[must_use]
    pub const fn draft(&self) -> &D {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn comment(body: &str) -> CommentDraft {
        CommentDraft {
            article_id: "4821".into(),
            author: Some("satoshi".into()),
            body: body.into(),
        }
    }

    #[test]
    fn submission_serializes_flat_with_captcha() {
        let submission = Submission::new(comment("Great write-up"), " tok-123 ").unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "articleId": "4821",
                "author": "satoshi",
                "body": "Great write-up",
                "captchaToken": "tok-123",
            })
        );
    }

    #[test]
    fn field_errors_surface_before_captcha() {
        let err = Submission::new(comment("   "), "").unwrap_err();
        assert_eq!(err.field, "body");
    }

    #[test]
    fn missing_captcha_rejected() {
        let err = Submission::new(comment("fine"), "").unwrap_err();
        assert_eq!(err.field, "captcha");
    }

    #[test]
    fn question_email_is_checked_when_present() {
        let draft = QuestionDraft {
            title: "Which exchange has the lowest fees?".into(),
            body: "Comparing spot fees for small trades.".into(),
            author: None,
            email: Some("not-an-email".into()),
            tags: vec!["fees".into()],
        };
        assert_eq!(draft.validate().unwrap_err().field, "email");

        let draft = QuestionDraft { email: None, ..draft };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn question_tag_limits() {
        let draft = QuestionDraft {
            title: "t".into(),
            body: "b".into(),
            author: None,
            email: None,
            tags: (0..6).map(|n| format!("tag{n}")).collect(),
        };
        assert_eq!(draft.validate().unwrap_err().field, "tags");
    }

    #[test]
    fn answer_body_omits_question_id() {
        let draft = AnswerDraft {
            question_id: "q-9".into(),
            body: "Use a limit order.".into(),
            author: None,
        };
        let submission = Submission::new(draft, "tok").unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json, serde_json::json!({"body": "Use a limit order.", "captchaToken": "tok"}));
        assert_eq!(submission.draft().question_id, "q-9");
    }

    #[test]
    fn subscription_validates_email() {
        let err = Submission::new(Subscription { email: "x@y".into() }, "tok").unwrap_err();
        assert_eq!(err.field, "email");
    }
}
