//! Scoring pipeline: turns a batch of raw jobs into ranked, proposal-ready jobs.
//!
//! Flow per job: categorize → (drop `other`) → estimate effort → extract tags →
//!               score → generate proposal. The batch is then stable-sorted by score.

use tracing::{debug, info};

use crate::models::job::{normalize, Category, IncomingJob, ProcessedJob, RawJob};
use crate::scoring::categorizer::categorize;
use crate::scoring::effort::estimate_effort;
use crate::scoring::proposal::generate_proposal;
use crate::scoring::scorer::score;
use crate::scoring::tags::extract_tags;

/// Processes a batch of raw jobs. Jobs that fit no category are dropped silently.
/// Output is sorted by descending score; equal scores keep input order.
pub fn process_jobs(raw_jobs: &[RawJob]) -> Vec<ProcessedJob> {
    let mut processed: Vec<ProcessedJob> = raw_jobs.iter().filter_map(process_job).collect();

    // `sort_by` is stable, which keeps ties in insertion order.
    processed.sort_by(|a, b| b.score.cmp(&a.score));

    info!("Processed {} of {} jobs", processed.len(), raw_jobs.len());
    processed
}

/// Normalizes untrusted jobs, then runs them through `process_jobs`.
pub fn process_incoming(incoming: Vec<IncomingJob>) -> Vec<ProcessedJob> {
    let raw: Vec<RawJob> = incoming.into_iter().map(normalize).collect();
    process_jobs(&raw)
}

/// Adds one processed job to an already-ranked batch, replacing any job with the
/// same id. The job lands after existing jobs of equal score.
pub fn insert_ranked(mut batch: Vec<ProcessedJob>, job: ProcessedJob) -> Vec<ProcessedJob> {
    batch.retain(|existing| existing.id != job.id);
    let position = batch.partition_point(|existing| existing.score >= job.score);
    batch.insert(position, job);
    batch
}

/// Runs a single job through the pipeline. `None` when it fits no category.
pub fn process_job(raw: &RawJob) -> Option<ProcessedJob> {
    let category = categorize(&raw.title, &raw.description);
    if category == Category::Other {
        debug!("Skipping job {}: no deliverable category", raw.id);
        return None;
    }

    let mut job = ProcessedJob {
        id: raw.id.clone(),
        title: raw.title.clone(),
        description: raw.description.clone(),
        budget: raw.budget,
        posted: raw.posted.clone(),
        url: raw.url.clone(),
        category,
        effort: estimate_effort(&raw.description),
        score: score(raw),
        tags: extract_tags(raw),
        proposal: String::new(),
    };
    job.proposal = generate_proposal(&job);

    Some(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobId;

    fn raw(id: i64, title: &str, description: &str, budget: i64) -> RawJob {
        RawJob {
            id: JobId::Int(id),
            title: title.to_string(),
            description: description.to_string(),
            budget,
            posted: "1h ago".to_string(),
            url: "https://www.fiverr.com/buyer_requests".to_string(),
        }
    }

    fn landing_page() -> RawJob {
        raw(
            1,
            "Need Simple Landing Page",
            "Quick landing page for my plumbing business. Must be mobile-friendly.",
            120,
        )
    }

    #[test]
    fn test_landing_page_scenario() {
        let out = process_jobs(&[landing_page()]);
        assert_eq!(out.len(), 1);
        let job = &out[0];
        assert_eq!(job.category, Category::Website);
        assert_eq!(job.score, 46);
        assert_eq!(job.effort, 1.5);
        assert!(job.tags.contains(&"Mobile".to_string()));
        assert!(job.tags.contains(&"Quick".to_string()));
        assert!(job.proposal.contains("need simple landing page"));
        assert!(job.proposal.contains("Delivery: 36h"));
    }

    #[test]
    fn test_other_category_is_dropped() {
        let dog = raw(2, "Dog walker", "I need someone to walk my dog", 500);
        assert!(process_jobs(&[dog]).is_empty());
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        assert!(process_jobs(&[]).is_empty());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let jobs = vec![
            raw(1, "Logo", "logo please", 10),                // 0
            raw(2, "Logo", "logo please", 200),               // 40
            raw(3, "Banner", "banner please", 10),            // 0, ties with #1
            raw(4, "Blog", "need a quick blog article", 120), // 30 + 5 + 6
        ];
        let out = process_jobs(&jobs);
        let ids: Vec<JobId> = out.iter().map(|j| j.id.clone()).collect();
        assert_eq!(
            ids,
            vec![JobId::Int(4), JobId::Int(2), JobId::Int(1), JobId::Int(3)]
        );
        for pair in out.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_deterministic_across_runs() {
        let jobs = vec![
            landing_page(),
            raw(2, "Scrape products", "Web scraping of 200 products to CSV", 80),
            raw(3, "Walk dog", "Daily walks", 50),
        ];
        assert_eq!(process_jobs(&jobs), process_jobs(&jobs));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let jobs = vec![landing_page()];
        let before = jobs.clone();
        let _ = process_jobs(&jobs);
        assert_eq!(jobs, before);
    }

    #[test]
    fn test_tags_never_exceed_six() {
        let jobs = vec![raw(
            1,
            "Website",
            "html css javascript python seo responsive asap pdf api integration",
            100,
        )];
        for job in process_jobs(&jobs) {
            assert!(job.tags.len() <= 6);
        }
    }

    #[test]
    fn test_two_hundred_budget_scenario_scores_66() {
        let job = raw(
            9,
            "Contact form",
            "I need a simple contact form on my website. Must be done by the deadline with specific fields.",
            200,
        );
        let out = process_jobs(&[job]);
        assert_eq!(out[0].score, 66);
    }

    #[test]
    fn test_insert_ranked_keeps_order_and_replaces() {
        let batch = process_jobs(&[
            raw(1, "Logo", "logo please", 200),  // 40
            raw(2, "Logo", "logo please", 10),   // 0
        ]);
        let newcomer = process_job(&raw(3, "Logo", "logo please", 60)).unwrap(); // 20
        let merged = insert_ranked(batch, newcomer);
        let ids: Vec<JobId> = merged.iter().map(|j| j.id.clone()).collect();
        assert_eq!(ids, vec![JobId::Int(1), JobId::Int(3), JobId::Int(2)]);

        let replacement = process_job(&raw(1, "Logo", "logo please", 10)).unwrap(); // 0
        let merged = insert_ranked(merged, replacement);
        let ids: Vec<JobId> = merged.iter().map(|j| j.id.clone()).collect();
        assert_eq!(ids, vec![JobId::Int(3), JobId::Int(2), JobId::Int(1)]);
    }

    #[test]
    fn test_process_incoming_normalizes() {
        let incoming = vec![IncomingJob {
            id: None,
            title: "Write blog posts".to_string(),
            description: "Five articles about fitness".to_string(),
            budget: None,
            posted: None,
            url: None,
        }];
        let out = process_incoming(incoming);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].budget, 0);
        assert_eq!(out[0].posted, "recently");
        assert_eq!(out[0].category, Category::Writing);
    }
}
