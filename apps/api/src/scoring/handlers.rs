//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::job::{normalize, IncomingJob, ProcessedJob};
use crate::scoring::filters::{JobFilter, JobStats};
use crate::scoring::pipeline::{insert_ranked, process_incoming, process_job};
use crate::sources::sample::{sample_jobs, SAMPLE_SOURCE};
use crate::state::AppState;
use crate::store::cache::{self, CachedBatch};
use crate::store::jobs::{get_job, upsert_job, upsert_jobs};

/// Batch label for jobs submitted one at a time before any scrape was cached.
const MANUAL_SOURCE: &str = "manual";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub jobs: Vec<ProcessedJob>,
    pub total: usize,
    pub source: String,
    pub timestamp: DateTime<Utc>,
}

impl BatchResponse {
    fn new(jobs: Vec<ProcessedJob>, source: String) -> Self {
        Self {
            success: true,
            total: jobs.len(),
            jobs,
            source,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default, alias = "sessionKey")]
    pub session_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddJobResponse {
    pub success: bool,
    /// False when the job fit no deliverable category and was skipped.
    pub stored: bool,
    pub job: Option<ProcessedJob>,
}

#[derive(Debug, Deserialize)]
pub struct ConfigRequest {
    #[serde(default, alias = "fiverr_session")]
    pub marketplace_session: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub success: bool,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn sample_batch() -> CachedBatch {
    CachedBatch {
        source: SAMPLE_SOURCE.to_string(),
        cached_at: Utc::now(),
        jobs: process_incoming(sample_jobs()),
    }
}

/// The batch the dashboard currently shows: the cached one, else the sample set.
async fn current_batch(state: &AppState) -> CachedBatch {
    match cache::load_batch(&state.redis).await {
        Ok(Some(batch)) => batch,
        Ok(None) => sample_batch(),
        Err(e) => {
            warn!("Batch cache unavailable, serving sample jobs: {e}");
            sample_batch()
        }
    }
}

async fn cache_batch(state: &AppState, batch: &CachedBatch) {
    if let Err(e) = cache::store_batch(&state.redis, batch, state.config.batch_cache_ttl_secs).await
    {
        warn!("Failed to cache batch of {} jobs: {e}", batch.jobs.len());
    }
}

/// Scores a scrape result, substituting the sample set when the scrape came back empty.
fn scraped_batch(scraped: Vec<IncomingJob>, source: &str) -> CachedBatch {
    if scraped.is_empty() {
        info!("No jobs scraped, using sample jobs");
        return sample_batch();
    }

    CachedBatch {
        source: source.to_string(),
        cached_at: Utc::now(),
        jobs: process_incoming(scraped),
    }
}

/// Title and description are mandatory for scoring.
pub fn validate_incoming(job: &IncomingJob) -> Result<(), AppError> {
    if job.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if job.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs?category=&min_budget=&max_budget=
///
/// Returns the current batch, filtered. Falls back to the sample set when nothing is cached.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(filter): Query<JobFilter>,
) -> Json<BatchResponse> {
    let batch = current_batch(&state).await;
    let jobs = filter.apply(batch.jobs);
    Json(BatchResponse::new(jobs, batch.source))
}

/// POST /api/v1/jobs/scrape
///
/// Scrapes the marketplace, scores the result, stores every job and caches the batch.
/// An empty scrape is replaced by the sample set.
pub async fn handle_scrape(
    State(state): State<AppState>,
    Json(request): Json<ScrapeRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let session = match request.session_key.filter(|s| !s.trim().is_empty()) {
        Some(key) => key,
        None => state
            .session
            .read()
            .await
            .clone()
            .ok_or_else(|| AppError::Validation("Session key required".to_string()))?,
    };

    let scraped = state.source.fetch(Some(session.as_str())).await;
    let batch = scraped_batch(scraped, state.source.name());

    upsert_jobs(&state.db, &batch.jobs).await?;
    cache_batch(&state, &batch).await;

    Ok(Json(BatchResponse::new(batch.jobs, batch.source)))
}

/// POST /api/v1/jobs
///
/// Accepts a single buyer request (e.g. from the browser extension), scores it,
/// stores it and merges it into the current batch.
pub async fn handle_add_job(
    State(state): State<AppState>,
    Json(request): Json<IncomingJob>,
) -> Result<Json<AddJobResponse>, AppError> {
    validate_incoming(&request)?;

    let raw = normalize(request);
    let Some(job) = process_job(&raw) else {
        return Ok(Json(AddJobResponse {
            success: true,
            stored: false,
            job: None,
        }));
    };

    upsert_job(&state.db, &job).await?;

    let batch = match cache::load_batch(&state.redis).await {
        Ok(Some(batch)) => batch,
        Ok(None) => CachedBatch {
            source: MANUAL_SOURCE.to_string(),
            cached_at: Utc::now(),
            jobs: Vec::new(),
        },
        Err(e) => {
            warn!("Batch cache unavailable, job {} stored only: {e}", job.id);
            return Ok(Json(AddJobResponse {
                success: true,
                stored: true,
                job: Some(job),
            }));
        }
    };

    let CachedBatch { source, jobs, .. } = batch;
    let batch = CachedBatch {
        source,
        cached_at: Utc::now(),
        jobs: insert_ranked(jobs, job.clone()),
    };
    cache_batch(&state, &batch).await;

    info!("Added job {} (score {})", job.id, job.score);
    Ok(Json(AddJobResponse {
        success: true,
        stored: true,
        job: Some(job),
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProcessedJob>, AppError> {
    let job = get_job(&state.db, &id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

/// GET /api/v1/stats
pub async fn handle_stats(State(state): State<AppState>) -> Json<JobStats> {
    let batch = current_batch(&state).await;
    Json(JobStats::from_jobs(&batch.jobs))
}

/// POST /api/v1/config
///
/// Replaces the marketplace session used by later scrapes. An empty value clears it.
pub async fn handle_set_config(
    State(state): State<AppState>,
    Json(request): Json<ConfigRequest>,
) -> Json<ConfigResponse> {
    if let Some(session) = request.marketplace_session {
        let session = Some(session).filter(|s| !s.trim().is_empty());
        *state.session.write().await = session;
        info!("Marketplace session updated");
    }

    Json(ConfigResponse {
        success: true,
        message: "Configuration updated".to_string(),
    })
}
