use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ListingKind;

/// Composite key identifying a viewed record for analytics.
///
/// Rendered as `kind#id` on the wire, e.g. `news#4821`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct ViewKey {
    pub kind: ListingKind,
    pub id: String,
}

impl ViewKey {
    #[must_use]
    pub fn new(kind: ListingKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}
