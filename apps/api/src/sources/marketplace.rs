//! Marketplace scraper: best-effort extraction of buyer requests from the listing page.
//!
//! The page layout is not under our control, so card detection walks a list of
//! known selectors and takes the first that matches anything.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, COOKIE, USER_AGENT};
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::job::{IncomingJob, DEFAULT_JOB_URL};
use crate::sources::JobSource;

pub const MARKETPLACE_SOURCE: &str = "marketplace";

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Card selectors, most specific first.
const CARD_SELECTORS: &[&str] = &[
    ".buyer-request-card",
    ".request-card",
    ".offer-card-wrapper",
    ".co-buyer-request-offer",
    "[data-cy*='request']",
    "[data-testid*='request']",
    "article",
];

const MAX_CARDS: usize = 10;
const MAX_DESCRIPTION_CHARS: usize = 300;
const MIN_PARAGRAPH_CHARS: usize = 20;
const DEFAULT_BUDGET: i64 = 100;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Marketplace returned status {0}")]
    Status(u16),

    #[error("Invalid session cookie value")]
    InvalidSession,
}

/// Fetches and parses the buyer request listing page.
#[derive(Clone)]
pub struct MarketplaceSource {
    client: Client,
    url: String,
}

impl MarketplaceSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client, url })
    }

    async fn try_fetch(&self, session: Option<&str>) -> Result<Vec<IncomingJob>, ScrapeError> {
        let mut request = self.client.get(&self.url);
        if let Some(session) = session {
            let cookie = format!(
                "hodor_creds={session}; logged_in_currency_v2=EUR; session_locale=en-US"
            );
            let value = HeaderValue::from_str(&cookie).map_err(|_| ScrapeError::InvalidSession)?;
            request = request.header(COOKIE, value);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes from {}", html.len(), self.url);
        Ok(parse_listing(&html))
    }
}

#[async_trait]
impl JobSource for MarketplaceSource {
    fn name(&self) -> &'static str {
        MARKETPLACE_SOURCE
    }

    async fn fetch(&self, session: Option<&str>) -> Vec<IncomingJob> {
        match self.try_fetch(session).await {
            Ok(jobs) => {
                info!("Scraped {} buyer requests from {}", jobs.len(), self.url);
                jobs
            }
            Err(e) => {
                warn!("Marketplace scrape failed: {e}");
                Vec::new()
            }
        }
    }
}

/// Extracts buyer requests from a listing page. Returns an empty list when no
/// card selector matches.
pub fn parse_listing(html: &str) -> Vec<IncomingJob> {
    let document = Html::parse_document(html);

    let cards: Vec<ElementRef> = CARD_SELECTORS
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .map(|selector| document.select(&selector).collect::<Vec<_>>())
        .find(|found| !found.is_empty())
        .unwrap_or_default();

    cards
        .into_iter()
        .take(MAX_CARDS)
        .enumerate()
        .filter_map(|(idx, card)| parse_card(card, idx))
        .collect()
}

fn parse_card(card: ElementRef, idx: usize) -> Option<IncomingJob> {
    let title = first_text(card, "h3, h4, h5")
        .unwrap_or_else(|| format!("Job Request #{}", idx + 1));

    let description = Selector::parse("p")
        .ok()
        .map(|p| {
            card.select(&p)
                .map(element_text)
                .filter(|t| t.chars().count() > MIN_PARAGRAPH_CHARS)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();
    let description: String = description.chars().take(MAX_DESCRIPTION_CHARS).collect();

    if title.is_empty() || description.is_empty() {
        return None;
    }

    Some(IncomingJob {
        id: None,
        title,
        description,
        budget: Some(extract_budget(card).unwrap_or(DEFAULT_BUDGET)),
        posted: None,
        url: Some(DEFAULT_JOB_URL.to_string()),
    })
}

fn first_text(card: ElementRef, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    card.select(&selector)
        .map(element_text)
        .find(|t| !t.is_empty())
}

fn element_text(el: ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// First whole number on a text line that mentions a currency or the word "budget".
fn extract_budget(card: ElementRef) -> Option<i64> {
    card.text()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|line| {
            line.contains('€') || line.contains('$') || line.to_lowercase().contains("budget")
        })
        .find_map(|line| {
            line.split_whitespace().find_map(|token| {
                let digits = token.trim_matches(|c: char| !c.is_ascii_digit());
                if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                    digits.parse().ok()
                } else {
                    None
                }
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::normalize;

    const LISTING: &str = r#"
        <html><body>
          <div class="buyer-request-card">
            <h3>Landing page for bakery</h3>
            <p>Need a simple landing page with a menu and contact form for our bakery.</p>
            <p>short</p>
            <div class="budget"><span>Budget</span> <span>€120</span></div>
          </div>
          <div class="buyer-request-card">
            <h4>Logo refresh</h4>
            <p>Looking for a modern logo for my consulting business, vector files please.</p>
          </div>
          <div class="buyer-request-card">
            <h3>No description</h3>
            <p>too short</p>
          </div>
          <article><h3>Ignored</h3><p>Article cards are only a fallback selector here.</p></article>
        </body></html>
    "#;

    #[test]
    fn test_parses_primary_cards() {
        let jobs = parse_listing(LISTING);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "Landing page for bakery");
        assert_eq!(
            jobs[0].description,
            "Need a simple landing page with a menu and contact form for our bakery."
        );
        assert_eq!(jobs[0].budget, Some(120));
        assert!(jobs[0].id.is_none());
    }

    #[test]
    fn test_budget_defaults_when_absent() {
        let jobs = parse_listing(LISTING);
        assert_eq!(jobs[1].title, "Logo refresh");
        assert_eq!(jobs[1].budget, Some(DEFAULT_BUDGET));
    }

    #[test]
    fn test_falls_back_to_later_selectors() {
        let html = r#"<div data-testid="buyer-request-7">
            <p>Convert my spreadsheet of 300 leads into a clean Excel workbook.</p>
            <span>$45</span>
        </div>"#;
        let jobs = parse_listing(html);
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Job Request #1");
        assert_eq!(jobs[0].budget, Some(45));
    }

    #[test]
    fn test_description_truncated() {
        let long = "word ".repeat(200);
        let html = format!(r#"<div class="request-card"><h3>Long</h3><p>{long}</p></div>"#);
        let jobs = parse_listing(&html);
        assert_eq!(jobs[0].description.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn test_caps_card_count() {
        let card = r#"<div class="request-card"><h3>Blog post</h3><p>Write a blog article about home coffee brewing.</p></div>"#;
        let html = card.repeat(15);
        assert_eq!(parse_listing(&html).len(), MAX_CARDS);
    }

    #[test]
    fn test_untitled_cards_get_distinct_ids() {
        let blog = r#"<div class="request-card"><p>Write a blog article about home coffee brewing.</p></div>"#;
        let landing = r#"<div class="request-card"><p>Need a landing page for my bakery with a contact form.</p></div>"#;

        let blog = parse_listing(blog).remove(0);
        let landing = parse_listing(landing).remove(0);
        assert_eq!(blog.title, landing.title);
        assert_ne!(normalize(blog).id, normalize(landing).id);
    }

    #[test]
    fn test_no_cards_is_empty() {
        assert!(parse_listing("<html><body><p>Please log in</p></body></html>").is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_marketplace_yields_empty() {
        let source = MarketplaceSource::new(
            "http://127.0.0.1:9/buyer_requests".to_string(),
            Duration::from_secs(2),
        )
        .unwrap();
        assert!(source.fetch(Some("token")).await.is_empty());
    }
}
