mod health;
mod stock;

use axum::http::StatusCode;

use crate::error::AppError;

pub use health::*;
pub use stock::*;

/// CORS preflight that did not carry the headers the CORS layer answers itself.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
