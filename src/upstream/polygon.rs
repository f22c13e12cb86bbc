use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::{TickerSource, UpstreamError};
use crate::models::{OverviewEnvelope, Ticker, TickerOverview};

pub const POLYGON_BASE_URL: &str = "https://api.polygon.io";
pub const CLIENT_TIMEOUT: Duration = Duration::from_secs(30);

/// Polygon.io reference-data client. The inner `reqwest::Client` pools
/// connections and is cheap to share.
#[derive(Clone)]
pub struct PolygonClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl PolygonClient {
    pub fn new(api_key: Option<String>) -> Result<Self, reqwest::Error> {
        Self::with_base_url(api_key, POLYGON_BASE_URL)
    }

    pub fn with_base_url(
        api_key: Option<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .user_agent(concat!("stock-overview-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn overview_url(&self, ticker: &Ticker) -> String {
        format!("{}/v3/reference/tickers/{}", self.base_url, ticker)
    }

    pub async fn fetch_ticker_overview(
        &self,
        ticker: &Ticker,
    ) -> Result<TickerOverview, UpstreamError> {
        let mut request = self.http.get(self.overview_url(ticker));
        if let Some(key) = &self.api_key {
            request = request.query(&[("apiKey", key)]);
        }

        let response = request.send().await.map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(UpstreamError::Transport)?;
        let envelope: OverviewEnvelope = serde_json::from_str(&body)?;

        if envelope.status != "OK" {
            return Err(UpstreamError::EnvelopeStatus(envelope.status));
        }

        tracing::debug!(
            %ticker,
            request_id = %envelope.request_id,
            count = envelope.count,
            has_next_page = envelope.next_url.is_some(),
            "ticker overview received"
        );

        envelope.results.ok_or(UpstreamError::MissingResults)
    }
}

impl TickerSource for PolygonClient {
    fn ticker_overview<'a>(
        &'a self,
        ticker: &'a Ticker,
    ) -> Pin<Box<dyn Future<Output = Result<TickerOverview, UpstreamError>> + Send + 'a>> {
        Box::pin(self.fetch_ticker_overview(ticker))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;

    async fn provider(
        Path(ticker): Path<String>,
        Query(params): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        if params.get("apiKey").map(String::as_str) != Some("test-key") {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"status": "ERROR", "error": "Unknown API Key"})),
            )
                .into_response();
        }

        match ticker.as_str() {
            "AAPL" => Json(json!({
                "status": "OK",
                "request_id": "req-1",
                "results": {
                    "ticker": "AAPL",
                    "name": "Apple Inc.",
                    "market_cap": 2_771_126_040_150.0_f64,
                    "primary_exchange": "XNAS"
                }
            }))
            .into_response(),
            "DELAY" => Json(json!({"status": "DELAYED", "request_id": "req-2"})).into_response(),
            "EMPTY" => Json(json!({"status": "OK", "request_id": "req-3"})).into_response(),
            "GARB" => "<html>not json</html>".into_response(),
            _ => (
                StatusCode::NOT_FOUND,
                Json(json!({"status": "NOT_FOUND", "message": "Ticker not found."})),
            )
                .into_response(),
        }
    }

    async fn spawn_provider() -> String {
        let app = Router::new().route("/v3/reference/tickers/:ticker", get(provider));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn ticker(raw: &str) -> Ticker {
        Ticker::parse(raw).unwrap()
    }

    async fn client() -> PolygonClient {
        PolygonClient::with_base_url(Some("test-key".into()), spawn_provider().await).unwrap()
    }

    #[test]
    fn builds_versioned_reference_url() {
        let client =
            PolygonClient::with_base_url(None, "https://provider.example.test/").unwrap();
        assert_eq!(
            client.overview_url(&ticker("brk.b")),
            "https://provider.example.test/v3/reference/tickers/BRK.B"
        );
    }

    #[tokio::test]
    async fn fetches_overview_record() {
        let overview = client()
            .await
            .fetch_ticker_overview(&ticker("AAPL"))
            .await
            .unwrap();
        assert_eq!(overview.ticker, "AAPL");
        assert_eq!(overview.name, "Apple Inc.");
        assert_eq!(overview.primary_exchange, "XNAS");
    }

    #[tokio::test]
    async fn non_success_http_status_is_reported() {
        let err = client()
            .await
            .fetch_ticker_overview(&ticker("ZZZZ"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Status(404)), "{err:?}");
    }

    #[tokio::test]
    async fn missing_credential_is_rejected_upstream() {
        let client = PolygonClient::with_base_url(None, spawn_provider().await).unwrap();
        let err = client
            .fetch_ticker_overview(&ticker("AAPL"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Status(401)), "{err:?}");
    }

    #[tokio::test]
    async fn non_ok_envelope_status_is_reported() {
        let err = client()
            .await
            .fetch_ticker_overview(&ticker("DELAY"))
            .await
            .unwrap_err();
        match err {
            UpstreamError::EnvelopeStatus(status) => assert_eq!(status, "DELAYED"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn ok_envelope_without_results_is_reported() {
        let err = client()
            .await
            .fetch_ticker_overview(&ticker("EMPTY"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::MissingResults), "{err:?}");
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let err = client()
            .await
            .fetch_ticker_overview(&ticker("GARB"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Decode(_)), "{err:?}");
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            PolygonClient::with_base_url(Some("test-key".into()), format!("http://{addr}"))
                .unwrap();
        let err = client
            .fetch_ticker_overview(&ticker("AAPL"))
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)), "{err:?}");
    }
}
