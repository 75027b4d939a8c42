//! URL construction for every endpoint.
//!
//! Pure string building so request shapes can be tested without a server.

use lewis_core::{Cursor, ListFilters, ListingKind};

fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// `GET /{kind}?limit&…&{cursor_param}`.
///
/// Guides have no free-text search, so a query is not sent for them.
pub fn list_url(
    base: &str,
    kind: ListingKind,
    filters: &ListFilters,
    cursor: Option<&Cursor>,
) -> String {
    let pairs = filters.query_pairs();
    let mut params: Vec<(&str, &str)> = pairs
        .iter()
        .filter(|(key, _)| *key != "query" || kind.supports_query())
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    if let Some(cursor) = cursor {
        params.push((kind.cursor_param(), cursor.as_str()));
    }
    format!("{base}/{}?{}", kind.path(), encode_pairs(params))
}

/// `GET /{kind}/{id}`.
pub fn item_url(base: &str, kind: ListingKind, id: &str) -> String {
    format!("{base}/{}/{}", kind.path(), urlencoding::encode(id))
}

/// `GET|POST /questions/{id}/answers`.
pub fn answers_url(base: &str, question_id: &str) -> String {
    format!(
        "{base}/{}/{}/answers",
        ListingKind::Questions.path(),
        urlencoding::encode(question_id)
    )
}

/// `GET /comments?articleId=`.
pub fn comments_url(base: &str, article_id: &str) -> String {
    format!("{base}/comments?{}", encode_pairs([("articleId", article_id)]))
}

/// `POST /comments`.
pub fn post_comment_url(base: &str) -> String {
    format!("{base}/comments")
}

/// `POST /questions`.
pub fn post_question_url(base: &str) -> String {
    format!("{base}/{}", ListingKind::Questions.path())
}

/// `GET /search?query&limit`.
pub fn search_url(base: &str, query: &str, limit: u32) -> String {
    let limit = limit.to_string();
    format!(
        "{base}/search?{}",
        encode_pairs([("query", query), ("limit", limit.as_str())])
    )
}

/// `POST /mailing-list`.
pub fn mailing_list_url(base: &str) -> String {
    format!("{base}/mailing-list")
}

/// `POST /analytics/views`.
pub fn views_url(base: &str) -> String {
    format!("{base}/analytics/views")
}
