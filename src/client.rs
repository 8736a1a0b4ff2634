use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::credentials::CredentialProvider;
use crate::enrich::enrich_rows;
use crate::error::SentimentError;
use crate::models::{NewsRecord, ResultSet};
use crate::params::FetchParams;

/// Production endpoint for Onclusive sentiment records.
pub const DEFAULT_BASE_URL: &str =
    "https://althub-backend.invisagealpha.com/api/OnclusiveSentiment/";

// Defensive only; the upstream API specifies no timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Onclusive news-sentiment endpoint.
///
/// One [`fetch`](Self::fetch) issues exactly one GET; there is no retry,
/// pagination, or caching layer. Construct with `enrich = true` to have
/// sentiment scores bucketed into labels on the way out.
pub struct SentimentClient {
    client: Client,
    base_url: String,
    credentials: Box<dyn CredentialProvider>,
    enrich: bool,
}

impl SentimentClient {
    pub fn new(credentials: impl CredentialProvider + 'static, enrich: bool) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Box::new(credentials),
            enrich,
        }
    }

    /// Points the client at a different endpoint, mainly for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches sentiment records matching `params`.
    ///
    /// An inverted date range (start after end, with no exact date set) is a
    /// soft failure: a diagnostic is logged and an empty set returned without
    /// touching the network.
    pub async fn fetch(&self, params: &FetchParams) -> Result<ResultSet, SentimentError> {
        let token = self.credentials.token()?;

        if params.date_range_inverted() {
            warn!(
                "start_date {} must be less than end_date {}; returning no records",
                params.start_date, params.end_date
            );
            return Ok(Vec::new());
        }

        let pairs = params.query_pairs();
        debug!("GET {} with {} query parameters", self.base_url, pairs.len());

        let response = self
            .client
            .get(&self.base_url)
            .header("accept", "application/json")
            .header("Authorization", format!("token {}", token))
            .query(&pairs)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SentimentError::Auth(format!(
                "server rejected the API token: {}",
                text
            )));
        }
        if !status.is_success() {
            return Err(SentimentError::Api { status, body: text });
        }

        parse_results(&text, self.enrich)
    }
}

/// Parses a response body into records, enriching them when requested.
///
/// The body must be a JSON object with a `results` array; anything else is a
/// format error, never an empty result.
fn parse_results(body: &str, enrich: bool) -> Result<ResultSet, SentimentError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| SentimentError::ResponseFormat(format!("body is not valid JSON: {e}")))?;

    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            SentimentError::ResponseFormat("response has no `results` array".to_string())
        })?;

    let mut rows: Vec<NewsRecord> = Vec::with_capacity(results.len());
    for value in results {
        let row = serde_json::from_value(value.clone())
            .map_err(|e| SentimentError::ResponseFormat(format!("malformed result row: {e}")))?;
        rows.push(row);
    }

    if enrich && !rows.is_empty() {
        enrich_rows(&mut rows)?;
    }

    Ok(rows)
}
