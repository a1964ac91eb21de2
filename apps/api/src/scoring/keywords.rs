//! Keyword tables driving categorization, effort, scoring and tagging.
//!
//! Every table is an ordered slice: categories are first-match-wins and tags
//! are truncated in declaration order, so iteration order is part of the contract.

use crate::models::job::Category;

pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Website,
        &["website", "web development", "landing page", "html", "css"],
    ),
    (
        Category::Scraping,
        &["scraping", "web scraping", "data extraction", "scraper"],
    ),
    (
        Category::Writing,
        &["writing", "content", "blog", "article", "copywriting"],
    ),
    (
        Category::Data,
        &["data entry", "research", "excel", "spreadsheet", "data analysis"],
    ),
    (
        Category::Graphics,
        &["logo", "graphic design", "social media", "banner"],
    ),
    (Category::Api, &["api", "integration", "webhook", "automation"]),
];

pub const TAG_KEYWORDS: &[(&str, &[&str])] = &[
    ("HTML", &["html", "web page"]),
    ("CSS", &["css", "styling", "design"]),
    ("JavaScript", &["javascript", "js", "interactive"]),
    ("Python", &["python", "scraping", "automation"]),
    ("SEO", &["seo", "search engine"]),
    ("Mobile", &["mobile", "responsive"]),
    ("Quick", &["urgent", "asap", "fast", "quick"]),
    ("PDF", &["pdf", "document"]),
    ("API", &["api", "integration"]),
];

pub const MAX_TAGS: usize = 6;

/// Effort tiers, checked in order: (hours, trigger words).
pub const EFFORT_TIERS: &[(f64, &[&str])] = &[
    (1.5, &["simple", "quick", "basic", "small"]),
    (2.5, &["medium", "standard", "regular"]),
];

/// Hours assumed when no tier word appears.
pub const DEFAULT_EFFORT_HOURS: f64 = 4.0;

pub const CLARITY_INDICATORS: &[&str] =
    &["need", "must", "deadline", "specific", "example", "attached"];

pub const QUICK_INDICATORS: &[&str] = &["simple", "quick", "basic", "small", "short"];

/// True if any keyword is a substring of `text`. `text` must already be lower-cased.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}

/// Number of distinct keywords present in `text` (presence, not frequency).
pub fn count_present(text: &str, keywords: &[&str]) -> u32 {
    keywords.iter().filter(|kw| text.contains(*kw)).count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_order() {
        let order: Vec<Category> = CATEGORY_KEYWORDS.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::Website,
                Category::Scraping,
                Category::Writing,
                Category::Data,
                Category::Graphics,
                Category::Api,
            ]
        );
    }

    #[test]
    fn test_other_has_no_keywords() {
        assert!(CATEGORY_KEYWORDS.iter().all(|(c, _)| *c != Category::Other));
    }

    #[test]
    fn test_count_present_ignores_frequency() {
        assert_eq!(count_present("need need need", CLARITY_INDICATORS), 1);
        assert_eq!(count_present("need it, must have it", CLARITY_INDICATORS), 2);
    }

    #[test]
    fn test_contains_any_substring() {
        assert!(contains_any("a responsive layout", &["responsive"]));
        assert!(!contains_any("nothing here", &["pdf", "document"]));
    }
}
