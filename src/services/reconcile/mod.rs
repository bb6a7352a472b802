// Drag / resize reconciliation
//
// Turns the final on-screen geometry of a finished gesture back into a date range.
// - Drag: moves the start, keeps the duration
// - Trailing handle: keeps the start, duration from width
// - Leading handle: start from offset, duration from width
// The resulting range always spans at least one day.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, TimelineError};
use crate::models::entity::{Block, BlockKey};
use crate::models::geometry::Geometry;
use crate::models::range::DateRange;
use crate::services::position::PositionMapper;
use crate::utils::date::add_days;

/// Shortest range a gesture may leave behind.
pub const MIN_DURATION_DAYS: i64 = 1;

/// Which edge of the block is being resized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ResizeHandle {
    /// Left edge - adjusts start date
    Leading,
    /// Right edge - adjusts end date
    Trailing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GestureKind {
    Drag,
    Resize(ResizeHandle),
}

impl GestureKind {
    pub fn is_resize(&self) -> bool {
        matches!(self, GestureKind::Resize(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            GestureKind::Drag => "drag",
            GestureKind::Resize(_) => "resize",
        }
    }
}

/// Per-block gesture state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Active(GestureKind),
}

/// Outcome of reconciling a finished gesture.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Reconciliation {
    pub range: DateRange,
    pub duration_days: i64,
    /// Text for the block's duration label
    pub label: String,
    /// Snapped placement to re-render the block at
    pub geometry: Geometry,
    /// True if degenerate input was replaced by a fallback
    pub clamped: bool,
}

/// Context captured when a gesture starts
#[derive(Clone, Debug)]
struct ActiveGesture {
    kind: GestureKind,
    anchor: DateRange,
}

/// Tracks active gestures and writes their results back onto blocks.
#[derive(Debug, Clone)]
pub struct DragResizeReconciler {
    mapper: PositionMapper,
    active: HashMap<BlockKey, ActiveGesture>,
}

impl DragResizeReconciler {
    pub fn new(mapper: PositionMapper) -> Self {
        Self {
            mapper,
            active: HashMap::new(),
        }
    }

    pub fn mapper(&self) -> &PositionMapper {
        &self.mapper
    }

    pub fn state(&self, key: BlockKey) -> GestureState {
        self.active
            .get(&key)
            .map_or(GestureState::Idle, |gesture| GestureState::Active(gesture.kind))
    }

    /// Idle → Active. Records the block's current range as the anchor.
    pub fn begin(&mut self, key: BlockKey, kind: GestureKind, block: &Block) -> Result<()> {
        if self.active.contains_key(&key) {
            return Err(TimelineError::GestureInProgress(key));
        }
        let anchor = last_valid_range(block, self.mapper.axis_start());
        log::debug!("Begin {} on block {} anchored at {:?}", kind.name(), key, anchor);
        self.active.insert(key, ActiveGesture { kind, anchor });
        Ok(())
    }

    /// Active → Idle without touching the block. Returns false if nothing was active.
    pub fn cancel(&mut self, key: BlockKey) -> bool {
        self.active.remove(&key).is_some()
    }

    /// Active → Idle, writing the reconciled range onto `block`.
    pub fn finish(&mut self, key: BlockKey, block: &mut Block, geometry: Geometry) -> Result<Reconciliation> {
        let gesture = self
            .active
            .remove(&key)
            .ok_or(TimelineError::NoActiveGesture(key))?;
        let (range, clamped) = gesture_range(&self.mapper, gesture.anchor, gesture.kind, geometry);
        if clamped {
            log::warn!(
                "Degenerate {} geometry on block {} (offset {}, width {}); clamped to {:?}",
                gesture.kind.name(),
                key,
                geometry.offset,
                geometry.width,
                range
            );
        }
        Ok(apply(&self.mapper, block, range, clamped))
    }
}

/// Reconcile a block directly from its final geometry, treating offset and width as
/// authoritative for both edges.
pub fn reconcile(block: &mut Block, offset: f64, width: f64, axis_start: NaiveDate, cell_width: f64) -> Reconciliation {
    let mapper = match PositionMapper::new(axis_start, cell_width) {
        Ok(mapper) => mapper,
        Err(err) => {
            log::warn!("{}; keeping block at its last valid range", err);
            let range = last_valid_range(block, axis_start);
            block.set_range(range);
            return Reconciliation {
                range,
                duration_days: range.days(),
                label: range.days().to_string(),
                geometry: Geometry::default(),
                clamped: true,
            };
        }
    };
    let anchor = last_valid_range(block, axis_start);
    let (range, clamped) = geometry_range(&mapper, anchor, Geometry::new(offset, width));
    if clamped {
        log::warn!(
            "Degenerate geometry (offset {}, width {}); clamped to {:?}",
            offset,
            width,
            range
        );
    }
    apply(&mapper, block, range, clamped)
}

/// The block's range if usable, otherwise a one-day range at its start or the axis start.
pub fn last_valid_range(block: &Block, axis_start: NaiveDate) -> DateRange {
    match (block.start, block.range()) {
        (_, Some(range)) if range.is_valid() => range,
        (Some(start), _) => DateRange::from_start(start, MIN_DURATION_DAYS),
        (None, _) => DateRange::from_start(axis_start, MIN_DURATION_DAYS),
    }
}

fn gesture_range(mapper: &PositionMapper, anchor: DateRange, kind: GestureKind, geometry: Geometry) -> (DateRange, bool) {
    match kind {
        GestureKind::Drag => {
            let (start, clamped) = start_from_offset(mapper, anchor, geometry.offset);
            (anchor.moved_to(start), clamped)
        }
        GestureKind::Resize(ResizeHandle::Trailing) => {
            let (days, clamped) = duration_from_width(mapper, geometry.width);
            (DateRange::from_start(anchor.start, days), clamped)
        }
        GestureKind::Resize(ResizeHandle::Leading) => geometry_range(mapper, anchor, geometry),
    }
}

fn geometry_range(mapper: &PositionMapper, anchor: DateRange, geometry: Geometry) -> (DateRange, bool) {
    let (start, offset_clamped) = start_from_offset(mapper, anchor, geometry.offset);
    let (days, width_clamped) = duration_from_width(mapper, geometry.width);
    (DateRange::from_start(start, days), offset_clamped || width_clamped)
}

fn start_from_offset(mapper: &PositionMapper, anchor: DateRange, offset: f64) -> (NaiveDate, bool) {
    if offset.is_finite() {
        (add_days(mapper.axis_start(), mapper.start_days(offset)), false)
    } else {
        (anchor.start, true)
    }
}

fn duration_from_width(mapper: &PositionMapper, width: f64) -> (i64, bool) {
    if !(width.is_finite() && width > 0.0) {
        return (MIN_DURATION_DAYS, true);
    }
    let days = mapper.duration_days(width);
    if days < MIN_DURATION_DAYS {
        (MIN_DURATION_DAYS, true)
    } else {
        (days, false)
    }
}

fn apply(mapper: &PositionMapper, block: &mut Block, range: DateRange, clamped: bool) -> Reconciliation {
    block.set_range(range);
    let duration_days = range.days();
    Reconciliation {
        range,
        duration_days,
        label: duration_days.to_string(),
        geometry: mapper.to_geometry(range.start, range.end),
        clamped,
    }
}
