use serde::{Deserialize, Serialize};

use crate::models::job::ProcessedJob;

/// Jobs at or above this score count as high-value in `JobStats`.
pub const HIGH_SCORE_THRESHOLD: u32 = 70;

const ALL_CATEGORIES: &str = "all";

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_max_budget() -> i64 {
    9999
}

/// Dashboard filter over a processed batch. Budget bounds are inclusive.
#[derive(Debug, Clone, Deserialize)]
pub struct JobFilter {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub min_budget: i64,
    #[serde(default = "default_max_budget")]
    pub max_budget: i64,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            category: default_category(),
            min_budget: 0,
            max_budget: default_max_budget(),
        }
    }
}

impl JobFilter {
    pub fn matches(&self, job: &ProcessedJob) -> bool {
        let category_ok =
            self.category == ALL_CATEGORIES || job.category.as_str() == self.category;
        category_ok && (self.min_budget..=self.max_budget).contains(&job.budget)
    }

    /// Keeps matching jobs, preserving their order.
    pub fn apply(&self, jobs: Vec<ProcessedJob>) -> Vec<ProcessedJob> {
        jobs.into_iter().filter(|j| self.matches(j)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStats {
    pub total_jobs: usize,
    pub high_score_count: usize,
    pub potential_revenue: i64,
}

impl JobStats {
    pub fn from_jobs(jobs: &[ProcessedJob]) -> Self {
        Self {
            total_jobs: jobs.len(),
            high_score_count: jobs
                .iter()
                .filter(|j| j.score >= HIGH_SCORE_THRESHOLD)
                .count(),
            potential_revenue: jobs
                .iter()
                .fold(0i64, |acc, j| acc.saturating_add(j.budget)),
        }
    }
}
