//! Timeline engine.
//!
//! One `Timeline` backs one rendered chart. It owns the derived axis (boundary, calendar,
//! position mapper) and the gesture tracker, and borrows the host's rows for each call.
//! When the data or settings change, build a new one rather than patching this one.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, TimelineError};
use crate::models::boundary::Boundary;
use crate::models::calendar::CalendarStructure;
use crate::models::entity::{Block, BlockKey, Entity, EntityId};
use crate::models::geometry::Geometry;
use crate::models::settings::TimelineSettings;
use crate::models::ui::ViewState;
use crate::services::boundary::BoundaryResolver;
use crate::services::calendar::{
    build_calendar, day_columns, grid_width, month_headers, DayColumn, MonthHeader,
};
use crate::services::position::PositionMapper;
use crate::services::reconcile::{
    DragResizeReconciler, GestureKind, GestureState, Reconciliation,
};
use crate::utils::date::{days_between, DateInput};

/// Extra pixel between the row headers and the slide.
const CHART_BORDER: f64 = 1.0;

/// Placement of one block on its row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockLayout {
    pub key: BlockKey,
    pub geometry: Geometry,
    /// Duration in days, shown inside the block
    pub label: String,
    pub tooltip: String,
    pub color: Option<String>,
    pub css_class: Option<String>,
}

/// One row of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowLayout {
    pub id: EntityId,
    pub name: String,
    pub height: f64,
    pub blocks: Vec<BlockLayout>,
}

/// Everything the host needs to draw the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderModel {
    pub boundary: Boundary,
    pub chart_width: f64,
    pub slide_width: f64,
    pub grid_width: f64,
    pub months: Vec<MonthHeader>,
    pub days: Vec<DayColumn>,
    pub rows: Vec<RowLayout>,
    pub view: ViewState,
}

/// Result of a finished gesture, for the host to re-render and pass to its callbacks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GestureOutcome {
    pub key: BlockKey,
    pub kind: GestureKind,
    pub reconciliation: Reconciliation,
    /// The updated block merged with its row's id and name
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    settings: TimelineSettings,
    boundary: Boundary,
    calendar: CalendarStructure,
    reconciler: DragResizeReconciler,
}

impl Timeline {
    /// Lay out the axis for `entities` using `settings`.
    pub fn new(settings: TimelineSettings, entities: &[Entity]) -> Result<Self> {
        Self::build(settings, entities, None)
    }

    /// Like [`Timeline::new`] with a fixed "today" for empty datasets.
    pub fn with_today(settings: TimelineSettings, entities: &[Entity], today: NaiveDate) -> Result<Self> {
        Self::build(settings, entities, Some(today))
    }

    fn build(settings: TimelineSettings, entities: &[Entity], today: Option<NaiveDate>) -> Result<Self> {
        settings.validate()?;

        let mut resolver = BoundaryResolver::new(settings.minimum_span_days())
            .explicit_start(settings.start_input())
            .explicit_end(settings.end_input());
        if let Some(today) = today {
            resolver = resolver.today(today);
        }
        let boundary = resolver.resolve(entities);

        let mapper = PositionMapper::new(boundary.start(), settings.cell_width)?
            .with_inset(settings.block_inset);
        let calendar = build_calendar(&boundary);

        log::info!(
            "Timeline axis {} .. {} ({} days, {} rows)",
            boundary.start(),
            boundary.end(),
            boundary.days(),
            entities.len()
        );

        Ok(Self {
            settings,
            boundary,
            calendar,
            reconciler: DragResizeReconciler::new(mapper),
        })
    }

    pub fn settings(&self) -> &TimelineSettings {
        &self.settings
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn calendar(&self) -> &CalendarStructure {
        &self.calendar
    }

    pub fn mapper(&self) -> &PositionMapper {
        self.reconciler.mapper()
    }

    /// Width of the row headers plus the visible slide.
    pub fn chart_width(&self) -> f64 {
        self.settings.v_header_width + self.settings.slide_width + CHART_BORDER
    }

    /// Change the visible slide width and return the new chart width.
    pub fn set_slide_width(&mut self, slide_width: f64) -> f64 {
        if slide_width.is_finite() && slide_width >= 0.0 {
            self.settings.slide_width = slide_width;
        } else {
            log::warn!("Ignoring slide width {}", slide_width);
        }
        self.chart_width()
    }

    /// Scroll offset that brings `date` to the left edge. Zero for undefined dates.
    pub fn focus_offset(&self, date: &DateInput) -> f64 {
        days_between(Some(self.boundary.start()), date.resolve()) as f64 * self.settings.cell_width
    }

    /// View state scrolled to the configured focus date.
    pub fn initial_view(&self) -> ViewState {
        ViewState {
            scroll_left: self
                .settings
                .focus_input()
                .map_or(0.0, |focus| self.focus_offset(&focus)),
            raised: None,
        }
    }

    /// Placement of one block, or `None` if its dates are undefined.
    pub fn block_layout(&self, key: BlockKey, owner: &Entity, block: &Block) -> Option<BlockLayout> {
        let range = block.range()?;
        Some(BlockLayout {
            key,
            geometry: self.mapper().to_geometry(range.start, range.end),
            label: block.duration_days().to_string(),
            tooltip: block.tooltip(owner),
            color: block.color.clone(),
            css_class: block.css_class.clone(),
        })
    }

    /// Compute the full render model for the host's rows.
    pub fn render(&self, entities: &[Entity]) -> RenderModel {
        let rows = entities
            .iter()
            .enumerate()
            .map(|(row, entity)| RowLayout {
                id: entity.id.clone(),
                name: entity.name.clone(),
                height: self.settings.cell_height,
                blocks: entity
                    .blocks
                    .iter()
                    .enumerate()
                    .filter_map(|(index, block)| {
                        let key = BlockKey::new(row, index);
                        let layout = self.block_layout(key, entity, block);
                        if layout.is_none() {
                            log::debug!("Skipping undated block {}", key);
                        }
                        layout
                    })
                    .collect(),
            })
            .collect();

        RenderModel {
            boundary: self.boundary,
            chart_width: self.chart_width(),
            slide_width: self.settings.slide_width,
            grid_width: grid_width(&self.calendar, self.settings.cell_width),
            months: month_headers(&self.calendar, &self.settings),
            days: day_columns(&self.calendar, &self.settings),
            rows,
            view: self.initial_view(),
        }
    }

    pub fn gesture_state(&self, key: BlockKey) -> GestureState {
        self.reconciler.state(key)
    }

    /// Start a drag or resize on a block and raise it above its neighbours.
    pub fn begin_gesture(
        &mut self,
        key: BlockKey,
        kind: GestureKind,
        entities: &[Entity],
        view: &mut ViewState,
    ) -> Result<()> {
        let behavior = self.settings.behavior;
        let allowed = match kind {
            GestureKind::Drag => behavior.draggable,
            GestureKind::Resize(_) => behavior.resizable,
        };
        if !allowed {
            return Err(TimelineError::GestureDisabled(kind.name()));
        }

        let block = lookup(entities, key).ok_or(TimelineError::UnknownBlock(key))?;
        self.reconciler.begin(key, kind, block)?;
        view.raise(key);
        Ok(())
    }

    /// Abort a gesture. The block keeps its dates.
    pub fn cancel_gesture(&mut self, key: BlockKey, view: &mut ViewState) -> bool {
        view.lower(key);
        self.reconciler.cancel(key)
    }

    /// Finish a gesture at its final geometry and write the new dates onto the block.
    pub fn finish_gesture(
        &mut self,
        key: BlockKey,
        entities: &mut [Entity],
        geometry: Geometry,
        view: &mut ViewState,
    ) -> Result<GestureOutcome> {
        let kind = match self.reconciler.state(key) {
            GestureState::Active(kind) => kind,
            GestureState::Idle => return Err(TimelineError::NoActiveGesture(key)),
        };
        let Some(entity) = entities.get_mut(key.row) else {
            self.cancel_gesture(key, view);
            return Err(TimelineError::UnknownBlock(key));
        };
        let Some(block) = entity.blocks.get_mut(key.index) else {
            self.cancel_gesture(key, view);
            return Err(TimelineError::UnknownBlock(key));
        };

        let reconciliation = self.reconciler.finish(key, block, geometry)?;
        view.lower(key);

        let entity = &*entity;
        let payload = entity.blocks[key.index].payload(entity);
        log::debug!(
            "Block {} {} to {:?}",
            key,
            if kind.is_resize() { "resized" } else { "moved" },
            reconciliation.range
        );

        Ok(GestureOutcome {
            key,
            kind,
            reconciliation,
            payload,
        })
    }
}

/// Find a block by key in the host's rows.
pub fn lookup(entities: &[Entity], key: BlockKey) -> Option<&Block> {
    entities.get(key.row)?.blocks.get(key.index)
}
