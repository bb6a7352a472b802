// Date range model
// A span of whole days with an exclusive end

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date::{add_days, days_between};

/// Span of whole calendar days, `[start, end)`.
///
/// The end is exclusive: a range from Jan 4 to Jan 6 occupies Jan 4 and Jan 5 and
/// renders as two grid cells. Duration labels show the same count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range of `days` days beginning at `start`. Near chrono's last date the range is
    /// moved back so it still spans `days` days.
    pub fn from_start(start: NaiveDate, days: i64) -> Self {
        let end = add_days(start, days);
        if days > 0 && days_between(Some(start), Some(end)) < days {
            return Self {
                start: add_days(end, -days),
                end,
            };
        }
        Self { start, end }
    }

    /// Number of days covered. Zero for empty or inverted ranges.
    pub fn days(&self) -> i64 {
        days_between(Some(self.start), Some(self.end))
    }

    /// True when the end is strictly after the start.
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// True if `other` lies entirely inside this range.
    pub fn covers(&self, other: &DateRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Smallest range containing both.
    pub fn union(&self, other: &DateRange) -> DateRange {
        DateRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Same duration, moved so it begins at `start`.
    pub fn moved_to(&self, start: NaiveDate) -> DateRange {
        DateRange::from_start(start, self.days())
    }

    /// Every day in the range, in order.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.days()).map(move |offset| add_days(start, offset))
    }
}
