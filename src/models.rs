use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One news-sentiment record as returned by the server.
///
/// The backend's field set is open-ended, so anything beyond the fields this
/// client touches lands in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_of_article: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagerank: Option<f64>,
    /// Fixed-code sentiment indicator from the provider, typically -50, 0 or 50.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_sentiment: Option<Value>,
    /// Provider score; may arrive as a number or a numeric string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_sentiment: Option<Value>,
    /// Bucketed category for the adjusted score, set when enrichment runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted_sentiment_label: Option<String>,
    /// Label for mapped raw codes, set when enrichment runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_sentiment_label: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Records in the order the server returned them.
pub type ResultSet = Vec<NewsRecord>;
