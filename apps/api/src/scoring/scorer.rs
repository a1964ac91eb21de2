//! Job desirability score, 0–100.
//!
//! Three independently capped components, summed and capped again:
//! - budget (0–40): step function at 50 / 100 / 150
//! - clarity (0–30): 5 points per clarity indicator present in title or description
//! - effort signal (0–30): 6 points per quick-win indicator present in the description

use serde::{Deserialize, Serialize};

use crate::models::job::RawJob;
use crate::scoring::keywords::{count_present, CLARITY_INDICATORS, QUICK_INDICATORS};

const BUDGET_CAP: u32 = 40;
const CLARITY_CAP: u32 = 30;
const EFFORT_SIGNAL_CAP: u32 = 30;
const MAX_SCORE: u32 = 100;

const CLARITY_POINTS: u32 = 5;
const QUICK_POINTS: u32 = 6;

/// Per-component view of a score, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub budget: u32,
    pub clarity: u32,
    pub effort_signal: u32,
    pub total: u32,
}

pub fn score(job: &RawJob) -> u32 {
    score_breakdown(job.budget, &job.title, &job.description).total
}

pub fn score_breakdown(budget: i64, title: &str, description: &str) -> ScoreBreakdown {
    let full_text = format!("{title} {description}").to_lowercase();
    let description = description.to_lowercase();

    let budget = budget_points(budget);
    let clarity =
        (count_present(&full_text, CLARITY_INDICATORS) * CLARITY_POINTS).min(CLARITY_CAP);
    let effort_signal =
        (count_present(&description, QUICK_INDICATORS) * QUICK_POINTS).min(EFFORT_SIGNAL_CAP);

    ScoreBreakdown {
        budget,
        clarity,
        effort_signal,
        total: (budget + clarity + effort_signal).min(MAX_SCORE),
    }
}

fn budget_points(budget: i64) -> u32 {
    let points = if budget >= 150 {
        40
    } else if budget >= 100 {
        30
    } else if budget >= 50 {
        20
    } else {
        0
    };
    points.min(BUDGET_CAP)
}
