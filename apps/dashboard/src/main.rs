mod chatbot;
mod client;
mod config;
mod errors;
mod models;
mod results;
mod routes;
mod state;
mod upload;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::client::MatchingClient;
use crate::config::Config;
use crate::results::reload_results;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting talent dashboard v{}", env!("CARGO_PKG_VERSION"));

    let client = MatchingClient::new(&config.matching_api_url, config.matching_api_timeout)?;
    info!("Matching service client initialized ({})", config.matching_api_url);

    let state = AppState::new(Arc::new(client), config.clone());

    // A failed first load is not fatal; the page can refresh later.
    if config.load_on_startup {
        if let Err(e) = reload_results(&state).await {
            warn!("Initial results load skipped: {e}");
        }
    }

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
