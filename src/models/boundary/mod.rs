// Boundary model
// The visible date axis of one rendered timeline

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimelineError};
use crate::models::range::DateRange;
use crate::utils::date::days_between;

/// Start and exclusive end of the horizontal axis. The end is always after the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateRange")]
pub struct Boundary {
    start: NaiveDate,
    end: NaiveDate,
}

impl Boundary {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end <= start {
            return Err(TimelineError::InvalidBoundary { start, end });
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `end > start`.
    pub(crate) fn from_parts(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(end > start);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of day columns on the axis.
    pub fn days(&self) -> i64 {
        days_between(Some(self.start), Some(self.end))
    }

    pub fn as_range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

impl TryFrom<DateRange> for Boundary {
    type Error = TimelineError;

    fn try_from(range: DateRange) -> Result<Self> {
        Boundary::new(range.start, range.end)
    }
}
