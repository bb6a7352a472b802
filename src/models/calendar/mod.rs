//! Calendar structure model.
//!
//! The axis is broken down into years, months and days. Months are stored in one ordered
//! list keyed by `(year, month)`; years are derived by grouping consecutive months.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::utils::date::is_weekend;

/// A single day column on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub weekend: bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekend: is_weekend(date),
        }
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

/// The days of one month that fall inside the axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    /// Calendar month number, 1 = January.
    pub month: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Zero-based month index for month-name tables.
    pub fn month_index(&self) -> usize {
        self.month.saturating_sub(1) as usize
    }

    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Consecutive months of one year, borrowed from the structure.
#[derive(Debug, Clone, Copy)]
pub struct CalendarYear<'a> {
    pub year: i32,
    pub months: &'a [CalendarMonth],
}

impl<'a> CalendarYear<'a> {
    pub fn days(&self) -> impl Iterator<Item = &'a CalendarDay> {
        self.months.iter().flat_map(|month| month.days.iter())
    }
}

/// Every day of the axis in chronological order, grouped by year and month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CalendarStructure {
    months: Vec<CalendarMonth>,
    day_count: usize,
}

impl CalendarStructure {
    /// Assemble from months already in chronological order.
    pub(crate) fn from_months(months: Vec<CalendarMonth>) -> Self {
        let day_count = months.iter().map(CalendarMonth::len).sum();
        Self { months, day_count }
    }

    pub fn months(&self) -> &[CalendarMonth] {
        &self.months
    }

    pub fn month(&self, year: i32, month: u32) -> Option<&CalendarMonth> {
        self.months
            .binary_search_by_key(&(year, month), CalendarMonth::key)
            .ok()
            .map(|idx| &self.months[idx])
    }

    /// Months grouped by year, ascending.
    pub fn years(&self) -> Vec<CalendarYear<'_>> {
        self.months
            .chunk_by(|a, b| a.year == b.year)
            .map(|months| CalendarYear {
                year: months[0].year,
                months,
            })
            .collect()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.months.iter().flat_map(|month| month.days.iter())
    }

    pub fn len(&self) -> usize {
        self.day_count
    }

    pub fn is_empty(&self) -> bool {
        self.day_count == 0
    }

    pub fn first_day(&self) -> Option<&CalendarDay> {
        self.months.first().and_then(|month| month.days.first())
    }

    /// The rightmost column, highlighted as "last" by the host.
    pub fn last_day(&self) -> Option<&CalendarDay> {
        self.months.last().and_then(|month| month.days.last())
    }

    /// Column index of a date, if it is on the axis.
    pub fn column_of(&self, date: NaiveDate) -> Option<usize> {
        let first = self.first_day()?.date;
        let column = usize::try_from((date - first).num_days()).ok()?;
        (column < self.day_count).then_some(column)
    }
}
