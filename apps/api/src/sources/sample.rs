use async_trait::async_trait;

use crate::models::job::{IncomingJob, JobId, DEFAULT_JOB_URL};
use crate::sources::JobSource;

pub const SAMPLE_SOURCE: &str = "sample";

fn sample(id: i64, title: &str, description: &str, budget: i64, posted: &str) -> IncomingJob {
    IncomingJob {
        id: Some(JobId::Int(id)),
        title: title.to_string(),
        description: description.to_string(),
        budget: Some(budget),
        posted: Some(posted.to_string()),
        url: Some(DEFAULT_JOB_URL.to_string()),
    }
}

/// Fixed fallback batch served when nothing live is available.
pub fn sample_jobs() -> Vec<IncomingJob> {
    vec![
        sample(
            1,
            "Simple Landing Page for Local Business",
            "Need a clean, professional landing page for my plumbing business. Must be mobile-friendly. I have logo and photos ready.",
            120,
            "2h ago",
        ),
        sample(
            2,
            "Scrape Product Data from E-commerce Site",
            "Extract product names, prices, and descriptions from competitor website. About 200 products. CSV output needed.",
            80,
            "4h ago",
        ),
        sample(
            3,
            "Write 5 Blog Posts About Fitness",
            "Need 5 articles, 800 words each, about home workouts and nutrition. SEO optimized. Deadline: 1 week.",
            150,
            "1h ago",
        ),
        sample(
            4,
            "Create Quote Calculator for My Business",
            "I'm an electrician and need a simple web app where I can input materials, labor hours, and get PDF quotes for clients.",
            200,
            "30m ago",
        ),
        sample(
            5,
            "Data Entry - 500 Contacts to Spreadsheet",
            "Copy contact information from business cards into Excel. Name, phone, email, company. Simple and straightforward.",
            60,
            "5h ago",
        ),
    ]
}

/// Source that always yields the sample batch.
pub struct SampleSource;

#[async_trait]
impl JobSource for SampleSource {
    fn name(&self) -> &'static str {
        SAMPLE_SOURCE
    }

    async fn fetch(&self, _session: Option<&str>) -> Vec<IncomingJob> {
        sample_jobs()
    }
}
