// Bookings Timeline Library
// Date-axis layout engine: boundary, calendar, position mapping and gesture reconciliation

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Result, TimelineError};
pub use models::boundary::Boundary;
pub use models::calendar::{CalendarDay, CalendarMonth, CalendarStructure};
pub use models::entity::{Block, BlockKey, Entity, EntityId};
pub use models::geometry::{BlockInset, Geometry};
pub use models::range::DateRange;
pub use models::settings::TimelineSettings;
pub use models::ui::ViewState;
pub use services::boundary::{resolve_boundary, BoundaryResolver};
pub use services::calendar::build_calendar;
pub use services::position::{to_date_range, to_geometry, PositionMapper};
pub use services::reconcile::{reconcile, DragResizeReconciler, GestureKind, ResizeHandle};
pub use services::timeline::Timeline;
