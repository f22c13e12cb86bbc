use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{
    models::{ApiError, ApiResponse, TickerError},
    upstream::UpstreamError,
};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid ticker: {0}")]
    InvalidTicker(#[from] TickerError),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request timeout")]
    RequestTimeout,

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Not implemented")]
    NotImplemented,

    #[error("Route not found")]
    RouteNotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidTicker(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message safe to show to API callers. Upstream and encoding details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidTicker(err) => err.to_string(),
            AppError::Upstream(_) => {
                "Failed to fetch stock data. Please check the ticker symbol.".into()
            }
            AppError::MethodNotAllowed => "Method not allowed".into(),
            AppError::RequestTimeout => "Request timeout".into(),
            AppError::Encoding(_) => "Failed to encode response".into(),
            AppError::NotImplemented => "Search functionality coming soon".into(),
            AppError::RouteNotFound => "Route not found".into(),
        }
    }

    fn envelope(&self) -> ApiResponse<()> {
        let status = self.status();
        ApiResponse::failure(ApiError {
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: self.public_message(),
            code: status.as_u16(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.envelope()) {
            Ok(body) => with_json_body(self.status(), body),
            Err(err) => {
                tracing::error!(error = %err, "failed to encode error envelope");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

/// Serializes `body` as the JSON response. An encoding failure becomes a 500 envelope.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_json_body(status, bytes),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode response");
            AppError::Encoding(err).into_response()
        }
    }
}

fn with_json_body(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}
