use crate::models::ScrapedCounts;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all market-count scrapers
/// This allows easy addition of new sources (Hemnet, Blocket, etc) in the future
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Scrape the current listing counts from the source
    async fn scrape(&self) -> Result<ScrapedCounts>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
