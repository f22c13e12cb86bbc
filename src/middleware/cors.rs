use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// CORS policy for the single frontend origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static(ALLOWED_ORIGIN))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
