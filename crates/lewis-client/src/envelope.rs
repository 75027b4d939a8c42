//! List envelope decoding.
//!
//! Every list endpoint wraps its page in an object, but field names differ
//! per listing (`items`/`nextToken`, `articles`/`nextPageToken`, …). The
//! names come from [`ListingKind`]; decoding is otherwise shared.

use lewis_core::{Cursor, ListingKind, Page};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Decode a list response into a [`Page`].
///
/// A missing or `null` items field is an empty page. A missing, `null` or
/// empty next-cursor field marks the last page.
pub fn parse_page<T: DeserializeOwned>(
    kind: ListingKind,
    body: Value,
) -> Result<Page<T>, ApiError> {
    let Value::Object(mut envelope) = body else {
        return Err(ApiError::Parse(format!(
            "{kind}: expected a JSON object envelope"
        )));
    };

    let items = match envelope.remove(kind.items_field()) {
        None | Some(Value::Null) => Vec::new(),
        Some(items) => serde_json::from_value(items)
            .map_err(|e| ApiError::Parse(format!("{kind}.{}: {e}", kind.items_field())))?,
    };

    let next_cursor = match envelope.get(kind.next_cursor_field()) {
        Some(Value::String(token)) => Cursor::issued(token.as_str()),
        Some(Value::Null) | None => None,
        Some(other) => {
            return Err(ApiError::Parse(format!(
                "{kind}.{}: expected a string cursor, got {other}",
                kind.next_cursor_field()
            )));
        }
    };

    let total = envelope.get("total").and_then(Value::as_u64);
    Ok(Page::new(items, next_cursor).with_total(total))
}

/// Decode an `{ "<field>": [...] }` wrapper used by the nested endpoints.
pub fn parse_list<T: DeserializeOwned>(field: &str, body: Value) -> Result<Vec<T>, ApiError> {
    match body {
        Value::Array(_) => {
            serde_json::from_value(body).map_err(|e| ApiError::Parse(format!("{field}: {e}")))
        }
        Value::Object(mut wrapper) => match wrapper.remove(field) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(items) => {
                serde_json::from_value(items).map_err(|e| ApiError::Parse(format!("{field}: {e}")))
            }
        },
        _ => Err(ApiError::Parse(format!("{field}: expected an object or array"))),
    }
}
