mod models;
mod scrapers;

use chrono::Utc;
use models::BooliSnapshot;
use scrapers::{BooliBrowserScraper, ScraperTrait};
use tracing::{info, Level};

const SNAPSHOT_FILE: &str = "booli_snapshot.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("🏠 Booli Watch - market snapshot scraper");
    info!("==========================================");
    info!("");

    // Create browser scraper
    let scraper = BooliBrowserScraper::new()?;

    // Run one scrape
    info!("Fetching listing counts from {}...", scraper.source_name());
    let counts = scraper.scrape().await?;

    // Wrap the counts with today's date
    let snapshot = BooliSnapshot::from_counts(counts, Utc::now());

    println!(
        "{}: {} till salu, {} snart till salu",
        snapshot.date, snapshot.for_sale, snapshot.soon_to_be_sold
    );

    // Save snapshot to JSON file
    let json = serde_json::to_string_pretty(&snapshot)?;
    tokio::fs::write(SNAPSHOT_FILE, json).await?;
    info!("💾 Saved snapshot to {}", SNAPSHOT_FILE);

    Ok(())
}
