// Calendar builder
// Expands a boundary into the day-by-day structure behind the header and grid

use chrono::Datelike;
use serde::Serialize;

use crate::models::boundary::Boundary;
use crate::models::calendar::{CalendarDay, CalendarMonth, CalendarStructure};
use crate::models::settings::TimelineSettings;

/// Build the calendar for `[boundary.start, boundary.end)` in one pass.
pub fn build_calendar(boundary: &Boundary) -> CalendarStructure {
    let mut months: Vec<CalendarMonth> = Vec::new();

    for date in boundary.as_range().iter_days() {
        let day = CalendarDay::new(date);
        match months.last_mut() {
            Some(month) if month.year == date.year() && month.month == date.month() => {
                month.days.push(day);
            }
            _ => months.push(CalendarMonth {
                year: date.year(),
                month: date.month(),
                days: vec![day],
            }),
        }
    }

    CalendarStructure::from_months(months)
}

/// One cell of the month row in the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthHeader {
    pub label: String,
    pub width: f64,
    pub last: bool,
}

/// One cell of the day row in the header, or one grid column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub day_of_month: u32,
    /// Weekend shading, already combined with the `show_weekends` setting
    pub weekend: bool,
    pub last: bool,
}

/// Month labels sized to the number of visible days in each month.
pub fn month_headers(calendar: &CalendarStructure, settings: &TimelineSettings) -> Vec<MonthHeader> {
    let count = calendar.months().len();
    calendar
        .months()
        .iter()
        .enumerate()
        .map(|(idx, month)| MonthHeader {
            label: format!("{}/{}", settings.month_name(month.month_index()), month.year),
            width: month.len() as f64 * settings.cell_width,
            last: idx + 1 == count,
        })
        .collect()
}

/// Day columns in axis order.
pub fn day_columns(calendar: &CalendarStructure, settings: &TimelineSettings) -> Vec<DayColumn> {
    let count = calendar.len();
    calendar
        .days()
        .enumerate()
        .map(|(idx, day)| DayColumn {
            day_of_month: day.day_of_month(),
            weekend: settings.show_weekends && day.weekend,
            last: idx + 1 == count,
        })
        .collect()
}

/// Total pixel width of the grid.
pub fn grid_width(calendar: &CalendarStructure, cell_width: f64) -> f64 {
    calendar.len() as f64 * cell_width
}
