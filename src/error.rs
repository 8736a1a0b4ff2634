use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by [`SentimentClient::fetch`](crate::SentimentClient::fetch).
#[derive(Debug, Error)]
pub enum SentimentError {
    /// No token was available, or the server rejected the one sent.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The server answered with a non-success status other than 401/403.
    #[error("API request failed with status {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Connection, DNS, or timeout failure from the underlying HTTP stack.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON, or lacked the `results` array.
    #[error("unexpected response format: {0}")]
    ResponseFormat(String),

    /// Enrichment met an `adjusted_sentiment` value that is not numeric.
    #[error("non-numeric sentiment value: {0}")]
    DataType(String),
}
