use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The two listing counts read off the Booli search page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedCounts {
    /// Listings currently on the market ("till salu")
    pub for_sale: u32,
    /// Listings announced but not yet on the market ("snart till salu")
    pub soon_to_be_sold: u32,
}

/// A dated record of the market counts, one per scrape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooliSnapshot {
    pub date: NaiveDate,
    pub for_sale: u32,
    pub soon_to_be_sold: u32,
}

impl BooliSnapshot {
    /// Wrap extracted counts with the UTC calendar date of `now`.
    ///
    /// Counts are non-negative by type; no further validation happens here.
    pub fn from_counts(counts: ScrapedCounts, now: DateTime<Utc>) -> Self {
        Self {
            date: now.date_naive(),
            for_sale: counts.for_sale,
            soon_to_be_sold: counts.soon_to_be_sold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn counts() -> ScrapedCounts {
        ScrapedCounts {
            for_sale: 50803,
            soon_to_be_sold: 35547,
        }
    }

    #[test]
    fn snapshot_date_is_utc_calendar_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let snapshot = BooliSnapshot::from_counts(counts(), now);

        assert_eq!(snapshot.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(snapshot.for_sale, 50803);
        assert_eq!(snapshot.soon_to_be_sold, 35547);
    }

    #[test]
    fn snapshot_is_deterministic_for_fixed_inputs() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();

        assert_eq!(
            BooliSnapshot::from_counts(counts(), now),
            BooliSnapshot::from_counts(counts(), now)
        );
    }

    #[test]
    fn time_of_day_is_discarded() {
        let morning = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 1).unwrap();
        let evening = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap();

        assert_eq!(
            BooliSnapshot::from_counts(counts(), morning).date,
            BooliSnapshot::from_counts(counts(), evening).date
        );
    }

    #[test]
    fn snapshot_serializes_to_sink_shape() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let snapshot = BooliSnapshot::from_counts(counts(), now);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2024-03-15",
                "for_sale": 50803,
                "soon_to_be_sold": 35547,
            })
        );
    }
}
