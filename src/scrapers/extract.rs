use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Anchor phrases rendered right after each count on the search page.
/// Page copy changes only need to touch these.
pub const FOR_SALE_ANCHOR: &str = "till salu";
pub const SOON_FOR_SALE_ANCHOR: &str = "snart till salu";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("anchor phrase \"{anchor}\" not found in text: \"{text}\"")]
    PatternNotFound { anchor: &'static str, text: String },
    #[error("could not parse \"{matched}\" as a count in text: \"{text}\"")]
    ParseFailure { matched: String, text: String },
}

// Each pattern scans the full text independently, leftmost occurrence first.
// If the page ever rendered the two phrases in reverse order the bindings
// would swap silently.
static RE_FOR_SALE: LazyLock<Regex> =
    LazyLock::new(|| anchored_count_pattern(FOR_SALE_ANCHOR));
static RE_SOON_FOR_SALE: LazyLock<Regex> =
    LazyLock::new(|| anchored_count_pattern(SOON_FOR_SALE_ANCHOR));

fn anchored_count_pattern(anchor: &str) -> Regex {
    Regex::new(&format!(r"(?i)([\d\s]+)\s+{}", regex::escape(anchor)))
        .expect("invalid anchor pattern")
}

/// Pull both listing counts out of the statistics phrase, e.g.
/// "50 803 till salu och 35 547 snart till salu" -> (50803, 35547).
pub fn extract_counts(raw_text: &str) -> Result<(u32, u32), ExtractionError> {
    let for_sale = extract_anchored_count(raw_text, &RE_FOR_SALE, FOR_SALE_ANCHOR)?;
    let soon_to_be_sold =
        extract_anchored_count(raw_text, &RE_SOON_FOR_SALE, SOON_FOR_SALE_ANCHOR)?;

    Ok((for_sale, soon_to_be_sold))
}

fn extract_anchored_count(
    text: &str,
    pattern: &Regex,
    anchor: &'static str,
) -> Result<u32, ExtractionError> {
    let captures = pattern
        .captures(text)
        .ok_or_else(|| ExtractionError::PatternNotFound {
            anchor,
            text: text.to_string(),
        })?;

    let matched = captures[1].to_string();

    // The capture permits whitespace groupings (including U+00A0 from
    // rendered text), so strip all of it before parsing.
    let digits: String = matched.chars().filter(|c| !c.is_whitespace()).collect();

    digits
        .parse::<u32>()
        .map_err(|_| ExtractionError::ParseFailure {
            matched,
            text: text.to_string(),
        })
}
