//! Date ↔ pixel conversion.
//!
//! A block occupying `[start, end)` sits `days(axis, start)` cells from the left edge and
//! is `days(start, end)` cells wide, shrunk by the configured inset. The inverse rounds
//! to the nearest whole cell (half away from zero) so unsnapped pixels still land on a day.

use chrono::NaiveDate;

use crate::error::{Result, TimelineError};
use crate::models::geometry::{BlockInset, Geometry};
use crate::models::range::DateRange;
use crate::utils::date::{add_days, days_between, max_day_span};

/// Converts between date ranges and grid geometry for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionMapper {
    axis_start: NaiveDate,
    cell_width: f64,
    inset: BlockInset,
}

impl PositionMapper {
    /// Mapper with no inset. Fails if `cell_width` is not a positive finite number.
    pub fn new(axis_start: NaiveDate, cell_width: f64) -> Result<Self> {
        if !(cell_width.is_finite() && cell_width > 0.0) {
            return Err(TimelineError::InvalidCellWidth(cell_width));
        }
        Ok(Self {
            axis_start,
            cell_width,
            inset: BlockInset::NONE,
        })
    }

    pub fn with_inset(mut self, inset: BlockInset) -> Self {
        self.inset = inset;
        self
    }

    pub fn axis_start(&self) -> NaiveDate {
        self.axis_start
    }

    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    pub fn inset(&self) -> BlockInset {
        self.inset
    }

    /// Pixel offset of the left edge of `date`'s column.
    pub fn date_to_x(&self, date: NaiveDate) -> f64 {
        days_between(Some(self.axis_start), Some(date)) as f64 * self.cell_width
    }

    /// Whole cells from the axis start to pixel `x`, rounded.
    pub fn x_to_days(&self, x: f64) -> i64 {
        let span = max_day_span() as f64;
        // NaN casts to 0
        (x / self.cell_width).round().clamp(-span, span) as i64
    }

    /// Placement of a block covering `[start, end)`.
    pub fn to_geometry(&self, start: NaiveDate, end: NaiveDate) -> Geometry {
        let size = days_between(Some(start), Some(end)) as f64;
        Geometry {
            offset: self.date_to_x(start) + self.inset.left,
            width: size * self.cell_width - self.inset.total(),
        }
    }

    /// Date range for a block at `geometry`. The duration may come out zero or negative
    /// for degenerate widths; callers that write to a block clamp it.
    pub fn to_date_range(&self, geometry: Geometry) -> Result<DateRange> {
        if !geometry.is_finite() {
            return Err(TimelineError::DegenerateGeometry {
                offset: geometry.offset,
                width: geometry.width,
            });
        }
        let start = add_days(self.axis_start, self.start_days(geometry.offset));
        let end = add_days(start, self.duration_days(geometry.width));
        Ok(DateRange::new(start, end))
    }

    /// Cells between the axis start and a block whose rendered left edge is at `offset`.
    pub(crate) fn start_days(&self, offset: f64) -> i64 {
        self.x_to_days(offset - self.inset.left)
    }

    /// Cells spanned by a block rendered `width` pixels wide.
    pub(crate) fn duration_days(&self, width: f64) -> i64 {
        self.x_to_days(width + self.inset.total())
    }

    /// Snap a raw geometry to the grid: the geometry of the range it maps to.
    pub fn snap(&self, geometry: Geometry) -> Result<Geometry> {
        let range = self.to_date_range(geometry)?;
        Ok(self.to_geometry(range.start, range.end))
    }
}

/// `offset = days(axis, start) * cell_width`, `width = days(start, end) * cell_width`.
///
/// A non-positive `cell_width` yields a zero geometry.
pub fn to_geometry(start: NaiveDate, end: NaiveDate, axis_start: NaiveDate, cell_width: f64) -> Geometry {
    match PositionMapper::new(axis_start, cell_width) {
        Ok(mapper) => mapper.to_geometry(start, end),
        Err(_) => Geometry::default(),
    }
}

/// Inverse of [`to_geometry`]: `start = axis + round(offset / w)`,
/// `end = start + round(width / w)`.
pub fn to_date_range(offset: f64, width: f64, axis_start: NaiveDate, cell_width: f64) -> Result<DateRange> {
    PositionMapper::new(axis_start, cell_width)?.to_date_range(Geometry::new(offset, width))
}
