//! Latest processed batch, cached in Redis so dashboard reads don't re-scrape.

use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::ProcessedJob;

pub const BATCH_CACHE_KEY: &str = "bidscout:batch:latest";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedBatch {
    pub source: String,
    pub cached_at: DateTime<Utc>,
    pub jobs: Vec<ProcessedJob>,
}

pub async fn store_batch(
    redis: &redis::Client,
    batch: &CachedBatch,
    ttl_secs: u64,
) -> Result<(), AppError> {
    let payload = serde_json::to_string(batch).map_err(|e| AppError::Internal(e.into()))?;
    let mut conn = redis.get_multiplexed_async_connection().await?;
    conn.set_ex::<_, _, ()>(BATCH_CACHE_KEY, payload, ttl_secs)
        .await?;
    Ok(())
}

/// `None` when nothing is cached or the entry expired.
pub async fn load_batch(redis: &redis::Client) -> Result<Option<CachedBatch>, AppError> {
    let mut conn = redis.get_multiplexed_async_connection().await?;
    let payload: Option<String> = conn.get(BATCH_CACHE_KEY).await?;

    payload
        .map(|p| serde_json::from_str(&p))
        .transpose()
        .map_err(|e| AppError::Internal(e.into()))
}
