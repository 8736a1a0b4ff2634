//! Async client for the Onclusive news-sentiment API.
//!
//! Builds a filtered query, issues one authenticated GET against the
//! sentiment endpoint, and returns the response's `results` rows in server
//! order, optionally enriched with human-readable sentiment labels.
//!
//! ```no_run
//! use news_sentiment_rs::{EnvCredentials, FetchParams, SentimentClient};
//!
//! # async fn run() -> Result<(), news_sentiment_rs::SentimentError> {
//! let client = SentimentClient::new(EnvCredentials::new(), true);
//! let rows = client.fetch(&FetchParams::for_ticker("AAPL")).await?;
//! for row in rows {
//!     println!("{:?} {:?}", row.published_on, row.adjusted_sentiment_label);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod credentials;
mod enrich;
mod error;
mod models;
mod params;

pub use client::{SentimentClient, DEFAULT_BASE_URL};
pub use credentials::{CredentialProvider, EnvCredentials, StaticCredentials, TOKEN_ENV_VAR};
pub use error::SentimentError;
pub use models::{NewsRecord, ResultSet};
pub use params::FetchParams;
