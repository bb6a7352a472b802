//! Boundary resolution.
//!
//! Scans every block of every row for the earliest start and latest end, widens the result
//! with any explicit overrides, then pads the end so the axis is at least as wide as the
//! visible slide.

use chrono::{Local, NaiveDate};

use crate::error::{Result, TimelineError};
use crate::models::boundary::Boundary;
use crate::models::entity::Entity;
use crate::models::range::DateRange;
use crate::utils::date::{add_days, days_between, DateInput};

/// Builder-style resolver for the visible axis.
#[derive(Debug, Clone)]
pub struct BoundaryResolver {
    minimum_span_days: i64,
    explicit_start: Option<NaiveDate>,
    explicit_end: Option<NaiveDate>,
    default_range: Option<DateRange>,
    today: Option<NaiveDate>,
}

impl BoundaryResolver {
    /// Resolver requiring at least `minimum_span_days` columns (never fewer than one).
    pub fn new(minimum_span_days: i64) -> Self {
        Self {
            minimum_span_days: minimum_span_days.max(1),
            explicit_start: None,
            explicit_end: None,
            default_range: None,
            today: None,
        }
    }

    /// Explicit axis start. Unparseable input is ignored.
    pub fn explicit_start(mut self, start: Option<DateInput>) -> Self {
        self.explicit_start = start.and_then(|input| resolve_override(&input, "start"));
        self
    }

    /// Explicit axis end. Unparseable input is ignored.
    pub fn explicit_end(mut self, end: Option<DateInput>) -> Self {
        self.explicit_end = end.and_then(|input| resolve_override(&input, "end"));
        self
    }

    /// Range used when the data holds no dated blocks.
    pub fn default_range(mut self, range: DateRange) -> Self {
        self.default_range = Some(range);
        self
    }

    /// Override the current date used as the empty-dataset anchor.
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Resolve the axis. Never fails: empty or undated data falls back to a default span.
    pub fn resolve(&self, entities: &[Entity]) -> Boundary {
        let base = match data_range(entities) {
            Ok(range) => range,
            Err(err) => {
                let fallback = self
                    .default_range
                    .unwrap_or_else(|| {
                        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
                        DateRange::new(today, today)
                    });
                log::debug!("{}; anchoring axis at {}", err, fallback.start);
                fallback
            }
        };

        let mut start = match self.explicit_start {
            Some(explicit) if explicit < base.start => explicit,
            _ => base.start,
        };
        let mut end = match self.explicit_end {
            Some(explicit) if explicit > base.end => explicit,
            _ => base.end,
        };

        if days_between(Some(start), Some(end)) < self.minimum_span_days {
            end = add_days(start, self.minimum_span_days);
        }
        // add_days saturates at chrono's upper limit
        if days_between(Some(start), Some(end)) < self.minimum_span_days {
            start = add_days(end, -self.minimum_span_days);
        }

        Boundary::from_parts(start, end)
    }
}

/// Earliest start and latest end over all blocks with both dates defined.
pub fn data_range(entities: &[Entity]) -> Result<DateRange> {
    entities
        .iter()
        .flat_map(|entity| entity.blocks.iter())
        .filter_map(|block| block.range())
        .reduce(|acc, range| acc.union(&range))
        .ok_or(TimelineError::EmptyDataset)
}

/// Resolve the axis for `entities` with the given minimum span and overrides.
pub fn resolve_boundary(
    entities: &[Entity],
    minimum_span_days: i64,
    explicit_start: Option<DateInput>,
    explicit_end: Option<DateInput>,
) -> Boundary {
    BoundaryResolver::new(minimum_span_days)
        .explicit_start(explicit_start)
        .explicit_end(explicit_end)
        .resolve(entities)
}

fn resolve_override(input: &DateInput, which: &str) -> Option<NaiveDate> {
    match input.require() {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("{}; ignoring explicit {} date", err, which);
            None
        }
    }
}
