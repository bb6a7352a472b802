// Settings module
// Per-render configuration for one timeline

use serde::{Deserialize, Serialize};

use crate::models::geometry::BlockInset;
use crate::utils::date::DateInput;

/// Extra columns added past the slide width so the grid never ends inside the viewport.
pub const MIN_SPAN_MARGIN_DAYS: i64 = 5;

/// Upper bound on columns derived from the slide width, about a century.
pub const MAX_SLIDE_COLUMNS: i64 = 36_600;

/// Which gestures the host should offer on blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    pub clickable: bool,
    pub draggable: bool,
    pub resizable: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            clickable: true,
            draggable: true,
            resizable: true,
        }
    }
}

/// Timeline settings, loadable from TOML. Missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Shade weekend columns on the grid
    pub show_weekends: bool,
    /// Pixels per day column
    pub cell_width: f64,
    /// Pixels per row
    pub cell_height: f64,
    /// Visible width of the scrolling grid
    pub slide_width: f64,
    /// Width of the row-name column left of the grid
    pub v_header_width: f64,
    pub month_names: Vec<String>,
    /// Explicit axis start; only ever widens the data-driven range
    pub start: Option<String>,
    /// Explicit axis end; only ever widens the data-driven range
    pub end: Option<String>,
    /// Date to scroll to after layout
    pub focus: Option<String>,
    pub behavior: Behavior,
    pub block_inset: BlockInset,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            show_weekends: true,
            cell_width: 21.0,
            cell_height: 31.0,
            slide_width: 400.0,
            v_header_width: 100.0,
            month_names: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            start: None,
            end: None,
            focus: None,
            behavior: Behavior::default(),
            block_inset: BlockInset::default(),
        }
    }
}

impl TimelineSettings {
    /// Days the axis must cover so the grid fills the slide, plus a small margin.
    pub fn minimum_span_days(&self) -> i64 {
        if !(self.cell_width > 0.0) || !self.slide_width.is_finite() {
            return MIN_SPAN_MARGIN_DAYS;
        }
        let columns = (self.slide_width / self.cell_width)
            .floor()
            .clamp(0.0, MAX_SLIDE_COLUMNS as f64) as i64;
        columns + MIN_SPAN_MARGIN_DAYS
    }

    pub fn start_input(&self) -> Option<DateInput> {
        self.start.as_deref().map(DateInput::from)
    }

    pub fn end_input(&self) -> Option<DateInput> {
        self.end.as_deref().map(DateInput::from)
    }

    pub fn focus_input(&self) -> Option<DateInput> {
        self.focus.as_deref().map(DateInput::from)
    }

    /// Name shown in the month header for a zero-based month index.
    pub fn month_name(&self, month_index: usize) -> String {
        self.month_names
            .get(month_index)
            .cloned()
            .unwrap_or_else(|| (month_index + 1).to_string())
    }

    /// Validate settings that would break layout arithmetic.
    pub fn validate(&self) -> Result<(), SettingsValidationError> {
        if !(self.cell_width.is_finite() && self.cell_width > 0.0) {
            return Err(SettingsValidationError::InvalidCellWidth);
        }
        if !(self.cell_height.is_finite() && self.cell_height > 0.0) {
            return Err(SettingsValidationError::InvalidCellHeight);
        }
        if !(self.slide_width.is_finite() && self.slide_width >= 0.0) {
            return Err(SettingsValidationError::InvalidSlideWidth);
        }
        if !(self.block_inset.left.is_finite() && self.block_inset.right.is_finite()) {
            return Err(SettingsValidationError::InvalidInset);
        }
        if self.block_inset.total() >= self.cell_width {
            return Err(SettingsValidationError::InsetWiderThanCell);
        }
        if self.month_names.len() != 12 {
            return Err(SettingsValidationError::MonthNameCount(self.month_names.len()));
        }
        Ok(())
    }
}

/// Validation errors for TimelineSettings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsValidationError {
    InvalidCellWidth,
    InvalidCellHeight,
    InvalidSlideWidth,
    InvalidInset,
    InsetWiderThanCell,
    MonthNameCount(usize),
}

impl std::fmt::Display for SettingsValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCellWidth => write!(f, "Cell width must be a positive number"),
            Self::InvalidCellHeight => write!(f, "Cell height must be a positive number"),
            Self::InvalidSlideWidth => write!(f, "Slide width must be zero or more"),
            Self::InvalidInset => write!(f, "Block inset must be finite"),
            Self::InsetWiderThanCell => {
                write!(f, "Block inset must leave part of a cell visible")
            }
            Self::MonthNameCount(count) => {
                write!(f, "Expected 12 month names, found {}", count)
            }
        }
    }
}

impl std::error::Error for SettingsValidationError {}
