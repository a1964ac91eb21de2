use crate::models::job::RawJob;
use crate::scoring::keywords::{contains_any, MAX_TAGS, TAG_KEYWORDS};

/// Skill/trait labels found in the description, in table order, at most `MAX_TAGS`.
pub fn extract_tags(job: &RawJob) -> Vec<String> {
    let text = job.description.to_lowercase();

    TAG_KEYWORDS
        .iter()
        .filter(|(_, keywords)| contains_any(&text, keywords))
        .take(MAX_TAGS)
        .map(|(tag, _)| tag.to_string())
        .collect()
}
