use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A row of the token price table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub price_usd: Option<f64>,
    /// Percent change over the last 24 hours.
    #[serde(default)]
    pub change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
}
