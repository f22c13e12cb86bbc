use axum::{http::StatusCode, response::Response};
use chrono::{SecondsFormat, Utc};

use crate::{error::json_response, models::HealthResponse};

pub const WELCOME: &str = "Welcome to the stock overview API - company data for beginner investors!";

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn health() -> Response {
    let body = HealthResponse {
        status: "ok".into(),
        message: "Stock overview API is running".into(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        version: env!("CARGO_PKG_VERSION").into(),
    };

    json_response(StatusCode::OK, &body)
}
