//! Job sources: where raw buyer requests come from.
//!
//! `AppState` holds an `Arc<dyn JobSource>`; the live marketplace scraper is the
//! default, and the fixed sample set backs it whenever a scrape comes back empty.

use async_trait::async_trait;

use crate::models::job::IncomingJob;

pub mod marketplace;
pub mod sample;

/// A provider of raw buyer requests.
///
/// `fetch` never fails: a source that cannot produce jobs logs why and returns
/// an empty list, and the scrape handler substitutes the sample set.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Short label reported to API clients as the batch `source`.
    fn name(&self) -> &'static str;

    async fn fetch(&self, session: Option<&str>) -> Vec<IncomingJob>;
}
