pub mod browser;
pub mod extract;
pub mod traits;
pub mod types;

pub use browser::BooliBrowserScraper;
pub use extract::{extract_counts, ExtractionError};
pub use traits::ScraperTrait;
