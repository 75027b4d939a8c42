use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SearchHitKind;

/// A site-wide search result. Ranking is the API's business.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub kind: SearchHitKind,
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub snippet: Option<String>,
}
