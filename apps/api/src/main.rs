mod config;
mod db;
mod errors;
mod models;
mod routes;
mod scoring;
mod sources;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, JobSourceKind};
use crate::db::create_pool;
use crate::routes::build_router;
use crate::sources::marketplace::MarketplaceSource;
use crate::sources::sample::SampleSource;
use crate::sources::JobSource;
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

    info!("Starting Bidscout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Initialize Redis
    let redis = redis::Client::open(config.redis_url.clone())?;
    info!("Redis client initialized");

    // Initialize the job source (MarketplaceSource by default; swap via JOB_SOURCE)
    let source: Arc<dyn JobSource> = match config.job_source {
        JobSourceKind::Marketplace => {
            info!("Job source: marketplace at {}", config.marketplace_url);
            Arc::new(MarketplaceSource::new(
                config.marketplace_url.clone(),
                Duration::from_secs(config.scrape_timeout_secs),
            )?)
        }
        JobSourceKind::Sample => {
            info!("Job source: built-in sample jobs");
            Arc::new(SampleSource)
        }
    };

    let state = AppState {
        db,
        redis,
        source,
        session: Arc::new(RwLock::new(config.marketplace_session.clone())),
        config: config.clone(),
    };

    // The dashboard and the browser extension call from other origins.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
