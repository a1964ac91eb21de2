use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::models::job::DEFAULT_JOB_URL;

/// Which `JobSource` backs `POST /api/v1/jobs/scrape`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSourceKind {
    Marketplace,
    Sample,
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a numeric one is malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    pub port: u16,
    pub rust_log: String,
    pub job_source: JobSourceKind,
    /// Buyer request listing page scraped by `POST /api/v1/jobs/scrape`.
    pub marketplace_url: String,
    /// Initial marketplace session cookie; replaceable at runtime via `POST /api/v1/config`.
    pub marketplace_session: Option<String>,
    pub scrape_timeout_secs: u64,
    pub batch_cache_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            job_source: job_source_from_env()?,
            marketplace_url: std::env::var("MARKETPLACE_URL")
                .unwrap_or_else(|_| DEFAULT_JOB_URL.to_string()),
            marketplace_session: std::env::var("MARKETPLACE_SESSION")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            scrape_timeout_secs: parse_env("SCRAPE_TIMEOUT_SECS", 15)
                .context("SCRAPE_TIMEOUT_SECS must be a whole number of seconds")?,
            batch_cache_ttl_secs: parse_env("BATCH_CACHE_TTL_SECS", 3600)
                .context("BATCH_CACHE_TTL_SECS must be a whole number of seconds")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn job_source_from_env() -> Result<JobSourceKind> {
    match std::env::var("JOB_SOURCE").as_deref() {
        Err(_) | Ok("marketplace") => Ok(JobSourceKind::Marketplace),
        Ok("sample") => Ok(JobSourceKind::Sample),
        Ok(other) => bail!("JOB_SOURCE must be 'marketplace' or 'sample', got '{other}'"),
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}
