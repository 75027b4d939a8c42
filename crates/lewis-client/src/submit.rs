//! Write endpoints.
//!
//! Every method takes a [`Submission`], so the draft and its CAPTCHA token
//! have been validated before any request is built.

use lewis_core::entities::{Answer, Comment, Question};
use lewis_core::forms::{AnswerDraft, CommentDraft, QuestionDraft, Submission, Subscription};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::read_json;
use crate::{ApiClient, routes};

/// Confirmation returned by the mailing list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubscribeAck {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiClient {
    async fn post<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!(url, "post request");
        read_json(self.http.post(url).json(body).send().await?).await
    }

    /// Post a comment under a news article.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the API rejects the comment (e.g. a failed
    /// CAPTCHA check) or the request fails.
    pub async fn post_comment(
        &self,
        submission: &Submission<CommentDraft>,
    ) -> Result<Comment, ApiError> {
        self.post(&routes::post_comment_url(&self.base_url), submission)
            .await
    }

    /// Ask a new community question.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the API rejects the question or the request
    /// fails.
    pub async fn ask_question(
        &self,
        submission: &Submission<QuestionDraft>,
    ) -> Result<Question, ApiError> {
        self.post(&routes::post_question_url(&self.base_url), submission)
            .await
    }

    /// Answer an existing question.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the API rejects the answer or the request
    /// fails.
    pub async fn post_answer(
        &self,
        submission: &Submission<AnswerDraft>,
    ) -> Result<Answer, ApiError> {
        let url = routes::answers_url(&self.base_url, &submission.draft().question_id);
        self.post(&url, submission).await
    }

    /// Join the mailing list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the API rejects the address or the request
    /// fails.
    pub async fn subscribe(
        &self,
        submission: &Submission<Subscription>,
    ) -> Result<SubscribeAck, ApiError> {
        self.post(&routes::mailing_list_url(&self.base_url), submission)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_ack_tolerates_empty_body() {
        let ack: SubscribeAck = serde_json::from_str("{}").unwrap();
        assert!(ack.message.is_none());

        let ack: SubscribeAck =
            serde_json::from_str(r#"{"message":"Check your inbox"}"#).unwrap();
        assert_eq!(ack.message.as_deref(), Some("Check your inbox"));
    }

    #[test]
    fn answer_body_omits_question_id() {
        let draft = AnswerDraft {
            question_id: "q1".into(),
            body: "Use a hardware wallet.".into(),
            author: None,
        };
        let submission = Submission::new(draft, "tok").unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("questionId").is_none());
        assert_eq!(json["captchaToken"], "tok");
    }
}
