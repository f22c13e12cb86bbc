use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{
        get_stock, health, method_not_allowed, missing_ticker, not_found, preflight, search,
        welcome,
    },
    middleware::cors::cors_layer,
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(welcome)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/health",
            get(health)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/stock/",
            get(missing_ticker)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/stock/:ticker",
            get(get_stock)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(
            "/api/search",
            get(search)
                .head(method_not_allowed)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
