mod polygon;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::models::{Ticker, TickerOverview};

pub use polygon::PolygonClient;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("failed to make request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("API request failed with status {0}")]
    Status(u16),

    #[error("API returned non-OK status: {0}")]
    EnvelopeStatus(String),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API response did not include a results record")]
    MissingResults,
}

/// Source of ticker overview records. Shared across requests, so it must be
/// usable concurrently.
pub trait TickerSource: Send + Sync {
    fn ticker_overview<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<TickerOverview, UpstreamError>> + Send + 'a>>;
}
