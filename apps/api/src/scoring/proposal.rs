//! Proposal generation. Fills the category template with budget and delivery time.

use crate::models::job::{Category, ProcessedJob};
use crate::scoring::templates::{
    API_PROPOSAL, DATA_PROPOSAL, GENERIC_PROPOSAL, SCRAPING_PROPOSAL, WEBSITE_PROPOSAL,
    WRITING_PROPOSAL,
};

/// Hours quoted as delivery time for a given effort estimate.
pub fn delivery_hours(effort: f64) -> u32 {
    (effort * 24.0).round() as u32
}

pub fn template_for(category: Category) -> &'static str {
    match category {
        Category::Website => WEBSITE_PROPOSAL,
        Category::Scraping => SCRAPING_PROPOSAL,
        Category::Writing => WRITING_PROPOSAL,
        Category::Data => DATA_PROPOSAL,
        Category::Api => API_PROPOSAL,
        Category::Graphics | Category::Other => GENERIC_PROPOSAL,
    }
}

pub fn generate_proposal(job: &ProcessedJob) -> String {
    // Title last, so braces inside user text are never treated as placeholders.
    template_for(job.category)
        .replace("{budget}", &job.budget.to_string())
        .replace("{delivery}", &delivery_hours(job.effort).to_string())
        .replace("{title}", &job.title.to_lowercase())
}
