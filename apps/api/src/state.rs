use std::sync::Arc;

use redis::Client as RedisClient;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::sources::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub redis: RedisClient,
    pub config: Config,
    /// Live job source. Default: `MarketplaceSource`.
    pub source: Arc<dyn JobSource>,
    /// Marketplace session cookie used when a scrape request doesn't carry one.
    pub session: Arc<RwLock<Option<String>>>,
}
