mod config;
mod errors;
mod pending;
mod readiness;
mod routes;
mod state;
mod taxonomy;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::pending::queue::PendingWriteQueue;
use crate::routes::build_router;
use crate::state::AppState;
use crate::taxonomy::CatalogTaxonomyProvider;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathway API v{}", env!("CARGO_PKG_VERSION"));

    // Load the role taxonomy catalog
    let taxonomy = CatalogTaxonomyProvider::from_path(&config.taxonomy_path, config.courses_per_skill)?;

    let policy = config.flush_policy();
    info!("Confidence edit flush policy: {:?}", policy);

    // Build app state
    let state = AppState {
        config: config.clone(),
        taxonomy: Arc::new(taxonomy),
        pending: Arc::new(Mutex::new(PendingWriteQueue::new(policy))),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the dashboard host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
