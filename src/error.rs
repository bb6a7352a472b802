//! Error kinds raised by the layout engine.
//!
//! Most of these never leave the engine: boundary and calendar construction and
//! reconciliation absorb them and fall back to a safe default. They surface only from the
//! lower-level conversions and the gesture bookkeeping, where the host may want to know.

use chrono::NaiveDate;

use crate::models::entity::BlockKey;
use crate::models::settings::SettingsValidationError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("Invalid date: '{0}'")]
    InvalidDate(String),

    #[error("Dataset contains no dated blocks")]
    EmptyDataset,

    #[error("Degenerate geometry: offset {offset}, width {width}")]
    DegenerateGeometry { offset: f64, width: f64 },

    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] SettingsValidationError),

    #[error("Cell width must be a positive number of pixels, got {0}")]
    InvalidCellWidth(f64),

    #[error("Boundary end {end} must be after start {start}")]
    InvalidBoundary { start: NaiveDate, end: NaiveDate },

    #[error("Block {0} already has a gesture in progress")]
    GestureInProgress(BlockKey),

    #[error("Block {0} has no gesture in progress")]
    NoActiveGesture(BlockKey),

    #[error("{0} is disabled for this timeline")]
    GestureDisabled(&'static str),

    #[error("No block at {0}")]
    UnknownBlock(BlockKey),
}

pub type Result<T> = std::result::Result<T, TimelineError>;
