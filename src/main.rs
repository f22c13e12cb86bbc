mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;
use upstream::PolygonClient;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stock_overview_api=info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    if dotenvy::dotenv().is_err() {
        tracing::warn!(".env file not found, using system environment variables");
    }

    let config = Config::from_env();
    match &config.polygon_api_key {
        Some(key) => tracing::info!(key_len = key.len(), "Polygon API key loaded"),
        None => tracing::warn!("POLYGON_API_KEY not set; stock lookups will fail upstream"),
    }

    let client = PolygonClient::new(config.polygon_api_key.clone())?;

    let state = AppState {
        upstream: Arc::new(client),
        config: config.clone(),
    };

    let app = routes::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
