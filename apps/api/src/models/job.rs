use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Listing page that buyer requests link back to when the source gave no URL.
pub const DEFAULT_JOB_URL: &str = "https://www.fiverr.com/buyer_requests";

/// Posted label used when the source did not say when the request was made.
pub const DEFAULT_POSTED: &str = "recently";

/// Job identifier. Marketplaces hand out numbers, the extension and manual
/// submissions may send strings; both serialize back as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Int(i64),
    Text(String),
}

impl JobId {
    /// Stable id for a job that arrived without one: UUIDv5 over title,
    /// description and budget, so resubmitting the same request keeps its id.
    pub fn derive_from_content(title: &str, description: &str, budget: i64) -> Self {
        let key = format!("{title}\u{1f}{description}\u{1f}{budget}");
        JobId::Text(Uuid::new_v5(&Uuid::NAMESPACE_OID, key.as_bytes()).to_string())
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Int(n) => write!(f, "{n}"),
            JobId::Text(s) => f.write_str(s),
        }
    }
}

/// Deliverable type a job is bucketed into. Declaration order is match priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Website,
    Scraping,
    Writing,
    Data,
    Graphics,
    Api,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Website => "website",
            Category::Scraping => "scraping",
            Category::Writing => "writing",
            Category::Data => "data",
            Category::Graphics => "graphics",
            Category::Api => "api",
            Category::Other => "other",
        }
    }
}

/// A buyer request as it arrives from a scrape, the extension or a manual POST.
/// Only title and description are mandatory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingJob {
    #[serde(default)]
    pub id: Option<JobId>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub posted: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A fully-populated buyer request, ready for the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawJob {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub budget: i64,
    pub posted: String,
    pub url: String,
}

/// Fills every optional field of an incoming job with its default.
pub fn normalize(incoming: IncomingJob) -> RawJob {
    let budget = incoming.budget.unwrap_or(0);
    let id = incoming.id.unwrap_or_else(|| {
        JobId::derive_from_content(&incoming.title, &incoming.description, budget)
    });

    RawJob {
        id,
        title: incoming.title,
        description: incoming.description,
        budget,
        posted: incoming.posted.unwrap_or_else(|| DEFAULT_POSTED.to_string()),
        url: incoming.url.unwrap_or_else(|| DEFAULT_JOB_URL.to_string()),
    }
}

/// A scored, categorized job with its generated proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedJob {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub budget: i64,
    pub posted: String,
    pub url: String,
    pub category: Category,
    /// Estimated hours: 1.5, 2.5 or 4.0.
    pub effort: f64,
    pub score: u32,
    pub tags: Vec<String>,
    pub proposal: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: String,
    pub payload: Json<ProcessedJob>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
