//! In-memory aggregation over rows fetched from the backend.
//!
//! Every table here is a pure function of the fetched rows plus the
//! caller-supplied inputs: same remote data, same range, same output.

use chrono::NaiveDate;

mod authors;
mod communities;
mod daily;
mod page;
mod snapshot;

pub use authors::{posts_per_author, AuthorPostCount};
pub use communities::{users_per_community, CommunityUserCount};
pub use daily::{posts_per_day, users_per_day, DailyCount};
pub use page::{Page, PAGE_SIZE};
pub use snapshot::StatusSnapshot;

/// Inclusive date range filtering the per-period reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// A reversed range can never match a row. Callers skip the fetch
    /// entirely and hand back an empty table.
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}

impl Default for DateRange {
    /// The fixed historical period the dashboard opens with.
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid default start date"),
            end: NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid default end date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_ranges_are_detected() {
        let default = DateRange::default();
        assert!(!default.is_reversed());

        let reversed = DateRange {
            start: default.end,
            end: default.start,
        };
        assert!(reversed.is_reversed());

        let single_day = DateRange {
            start: default.start,
            end: default.start,
        };
        assert!(!single_day.is_reversed());
    }
}
