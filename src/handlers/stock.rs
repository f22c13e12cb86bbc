use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::{
    error::{json_response, AppError},
    models::{simplify, ApiResponse, Ticker, TickerError},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

pub async fn get_stock(
    State(state): State<AppState>,
    raw: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(raw) = raw.map_err(|rejection| {
        tracing::warn!(error = %rejection, "undecodable ticker segment");
        TickerError::InvalidCharacter {
            ch: char::REPLACEMENT_CHARACTER,
        }
    })?;
    let ticker = Ticker::parse(&raw)?;
    tracing::info!(%ticker, "fetching stock data");

    // Dropping the losing branch cancels the in-flight upstream request.
    let overview = tokio::select! {
        result = state.upstream.ticker_overview(&ticker) => result.map_err(|err| {
            tracing::error!(%ticker, error = %err, "failed to fetch stock data");
            AppError::from(err)
        })?,
        _ = tokio::time::sleep(state.config.request_timeout) => {
            tracing::warn!(
                %ticker,
                timeout_ms = state.config.request_timeout.as_millis() as u64,
                "request timed out waiting for upstream"
            );
            return Err(AppError::RequestTimeout);
        }
    };

    let stock = simplify(overview);
    let response = json_response(StatusCode::OK, &ApiResponse::ok(stock));
    if response.status().is_success() {
        tracing::info!(%ticker, "returned stock data");
    }
    Ok(response)
}

/// `/api/stock/` with nothing after the slash.
pub async fn missing_ticker() -> AppError {
    AppError::InvalidTicker(TickerError::Missing)
}

/// Always answers 501, even when the query string does not decode.
pub async fn search(params: Option<Query<SearchParams>>) -> AppError {
    let query = params.and_then(|Query(params)| params.q);
    tracing::info!(
        query = query.as_deref().unwrap_or_default(),
        "search requested before it is available"
    );
    AppError::NotImplemented
}
