use crate::models::job::Category;
use crate::scoring::keywords::{contains_any, CATEGORY_KEYWORDS};

/// Buckets a job by the first category whose keywords appear in its title or description.
/// Returns `Category::Other` when nothing matches.
pub fn categorize(title: &str, description: &str) -> Category {
    let text = format!("{title} {description}").to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Other)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landing_page_is_website() {
        assert_eq!(
            categorize("Need Simple Landing Page", "Quick page for my business"),
            Category::Website
        );
    }

    #[test]
    fn test_matches_in_description_only() {
        assert_eq!(
            categorize("Help wanted", "Copy contacts into a spreadsheet"),
            Category::Data
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("LOGO for bakery", ""), Category::Graphics);
    }

    #[test]
    fn test_first_declared_category_wins() {
        // "website" (website) and "api" (api) both present; website is declared first.
        assert_eq!(
            categorize("Connect my website to a payment API", ""),
            Category::Website
        );
        // "scraper" (scraping) beats "excel" (data).
        assert_eq!(
            categorize("Build a scraper", "Results go into excel"),
            Category::Scraping
        );
    }

    #[test]
    fn test_unmatched_is_other() {
        assert_eq!(
            categorize("Dog walker", "I need someone to walk my dog"),
            Category::Other
        );
    }

    #[test]
    fn test_keyword_can_span_title_and_description_join() {
        // Joined text is "landing page" with the separating space.
        assert_eq!(categorize("landing", "page"), Category::Website);
    }
}
