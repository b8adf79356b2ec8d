use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings for one scrape of the Booli search page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Search page that renders the listing counts
    pub search_url: String,
    /// User agent presented to the site
    pub user_agent: String,
    /// Navigation timeout (seconds)
    pub nav_timeout_secs: u64,
    /// Wait after navigation before reading the page (seconds)
    pub settle_delay_secs: u64,
    /// How long to keep polling for the counts text (seconds)
    pub locate_timeout_secs: u64,
}

impl ScrapeConfig {
    pub fn nav_timeout(&self) -> Duration {
        Duration::from_secs(self.nav_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_secs(self.settle_delay_secs)
    }

    pub fn locate_timeout(&self) -> Duration {
        Duration::from_secs(self.locate_timeout_secs)
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            search_url: "https://www.booli.se/sok/till-salu".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            nav_timeout_secs: 60,
            settle_delay_secs: 5,
            locate_timeout_secs: 10,
        }
    }
}
