use crate::models::ScrapedCounts;
use crate::scrapers::extract::extract_counts;
use crate::scrapers::traits::ScraperTrait;
use crate::scrapers::types::ScrapeConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions, Tab};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Locator pattern evaluated inside the page, matching the statistics
/// phrase the search page renders above the result list.
const STATS_TEXT_PATTERN: &str = r"till salu och[\s\S]*snart till salu";

/// Browser-based scraper for the Booli listing counts using headless Chrome
pub struct BooliBrowserScraper {
    browser: Browser,
    config: ScrapeConfig,
}

impl BooliBrowserScraper {
    /// Create a new browser-based scraper with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ScrapeConfig::default())
    }

    /// Create a new browser-based scraper with a custom configuration
    pub fn with_config(config: ScrapeConfig) -> Result<Self> {
        info!("Launching headless Chrome...");

        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .context("Failed to build launch options")?;

        let browser = Browser::new(options)
            .context("Failed to launch Chrome browser")?;

        Ok(Self { browser, config })
    }

    /// Navigate to the search page and return the text content of the first
    /// element containing the listing counts phrase.
    pub fn locate_stats_text(&self) -> Result<String> {
        let tab = self.browser.new_tab()?;
        tab.set_default_timeout(self.config.nav_timeout());
        tab.set_user_agent(&self.config.user_agent, None, None)?;

        info!("Opening search page {}...", self.config.search_url);
        tab.navigate_to(&self.config.search_url)?;
        tab.wait_until_navigated()?;

        info!("Waiting for page to load...");
        thread::sleep(self.config.settle_delay());

        // Accept cookies if present
        let _ = tab.evaluate(
            r#"
            const button = document.querySelector('button[id*="accept"], button[id*="godkann"]');
            if (button) button.click();
            "#,
            false,
        );

        info!("Looking for listing counts...");
        let deadline = Instant::now() + self.config.locate_timeout();

        loop {
            if let Some(text) = self.try_locate(&tab)? {
                debug!("Found text: {}", text);
                return Ok(text);
            }

            if Instant::now() >= deadline {
                anyhow::bail!(
                    "Could not find listing counts on {} within {:?}",
                    self.config.search_url,
                    self.config.locate_timeout()
                );
            }

            thread::sleep(Duration::from_millis(500));
        }
    }

    /// Ask the page for the deepest element whose text matches the counts
    /// phrase, mirroring a text locator's smallest-match semantics.
    fn try_locate(&self, tab: &Arc<Tab>) -> Result<Option<String>> {
        let expression = format!(
            r#"
            (() => {{
                const pattern = new RegExp({pattern:?}, 'i');
                const walker = document.createTreeWalker(document.body, NodeFilter.SHOW_ELEMENT);
                let node;
                while ((node = walker.nextNode())) {{
                    const text = node.textContent || '';
                    if (!pattern.test(text)) continue;
                    const inChild = Array.from(node.children).some(c => pattern.test(c.textContent || ''));
                    if (!inChild) return text;
                }}
                return null;
            }})()
            "#,
            pattern = STATS_TEXT_PATTERN
        );

        let result = tab
            .evaluate(&expression, false)
            .context("Failed to evaluate locator script")?;

        Ok(result
            .value
            .and_then(|value| value.as_str().map(str::to_string)))
    }
}

#[async_trait]
impl ScraperTrait for BooliBrowserScraper {
    async fn scrape(&self) -> Result<ScrapedCounts> {
        info!("Starting Booli scrape...");

        let raw_text = self.locate_stats_text()?;
        let (for_sale, soon_to_be_sold) = extract_counts(&raw_text)?;

        info!(
            "Scraped data: For sale={}, Soon to be sold={}",
            for_sale, soon_to_be_sold
        );

        Ok(ScrapedCounts {
            for_sale,
            soon_to_be_sold,
        })
    }

    fn source_name(&self) -> &'static str {
        "Booli"
    }
}
