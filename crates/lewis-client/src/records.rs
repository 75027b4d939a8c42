//! Single-record endpoints and the lists nested under a record.

use lewis_core::ListingKind;
use lewis_core::entities::{Answer, Comment};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::envelope::parse_list;
use crate::error::ApiError;
use crate::http::read_json;
use crate::{ApiClient, routes};

impl ApiClient {
    /// Fetch one record of `kind` by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] on 404, or another [`ApiError`] if the
    /// request or decoding fails.
    pub async fn get<T: DeserializeOwned>(
        &self,
        kind: ListingKind,
        id: &str,
    ) -> Result<T, ApiError> {
        let url = routes::item_url(&self.base_url, kind, id);
        tracing::debug!(listing = %kind, id, "get request");
        match read_json(self.http.get(&url).send().await?).await {
            Err(ApiError::Api { status: 404, .. }) => Err(ApiError::NotFound {
                kind,
                id: id.to_string(),
            }),
            other => other,
        }
    }

    /// Answers posted under a question.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn answers(&self, question_id: &str) -> Result<Vec<Answer>, ApiError> {
        let url = routes::answers_url(&self.base_url, question_id);
        let body: Value = read_json(self.http.get(&url).send().await?).await?;
        parse_list("answers", body)
    }

    /// Comments posted under a news article.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request or decoding fails.
    pub async fn comments(&self, article_id: &str) -> Result<Vec<Comment>, ApiError> {
        let url = routes::comments_url(&self.base_url, article_id);
        let body: Value = read_json(self.http.get(&url).send().await?).await?;
        parse_list("comments", body)
    }
}

#[cfg(test)]
mod tests {
    use lewis_core::entities::{Answer, Comment};
    use pretty_assertions::assert_eq;

    use crate::envelope::parse_list;

    const ANSWERS_FIXTURE: &str = r#"{
        "answers": [
            {
                "id": "a1",
                "questionId": "q1",
                "body": "Use a hardware wallet.",
                "author": "hodler",
                "createdAt": "2024-03-01T12:00:00Z"
            },
            { "id": "a2", "questionId": "q1", "body": "Seed phrase on steel." }
        ]
    }"#;

    const COMMENTS_FIXTURE: &str = r#"{
        "comments": [
            { "id": "c1", "articleId": "4821", "body": "Great write-up" }
        ]
    }"#;

    #[test]
    fn parse_answers_response() {
        let body = serde_json::from_str(ANSWERS_FIXTURE).unwrap();
        let answers: Vec<Answer> = parse_list("answers", body).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers[0].author.as_deref(), Some("hodler"));
        assert!(answers[0].created_at.is_some());
        assert!(answers[1].author.is_none());
    }

    #[test]
    fn parse_comments_response() {
        let body = serde_json::from_str(COMMENTS_FIXTURE).unwrap();
        let comments: Vec<Comment> = parse_list("comments", body).unwrap();
        assert_eq!(comments[0].article_id, "4821");
        assert!(comments[0].author.is_none());
    }
}
