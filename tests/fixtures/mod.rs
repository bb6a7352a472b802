// Test fixtures - reusable test data
// Provides consistent timeline data across all test files

#![allow(dead_code)]

use bookings_timeline::{Block, Entity};
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Returns Jan 1, 2024 (a Monday)
    pub fn jan_1_2024() -> NaiveDate {
        ymd(2024, 1, 1)
    }

    /// Returns Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }

    /// Returns Dec 30, 2024, two days before the year changes
    pub fn year_end_2024() -> NaiveDate {
        ymd(2024, 12, 30)
    }
}

/// Sample rows for testing
pub mod entities {
    use super::*;

    /// Three rooms; one with no bookings
    pub fn hotel() -> Vec<Entity> {
        vec![
            Entity::new(101, "Room 101")
                .with_block(Block::new(dates::ymd(2024, 1, 4), dates::ymd(2024, 1, 6)))
                .with_block(
                    Block::builder()
                        .start(dates::ymd(2024, 1, 10))
                        .end(dates::ymd(2024, 1, 15))
                        .title("Conference group")
                        .color("#F59E0B")
                        .build(),
                ),
            Entity::new(102, "Room 102"),
            Entity::new("suite", "Garden Suite")
                .with_block(Block::new(dates::leap_day_2024(), dates::ymd(2024, 3, 3))),
        ]
    }

    /// The same rooms as the JSON the host would load
    pub const HOTEL_JSON: &str = r##"[
        { "id": 101, "name": "Room 101", "series": [
            { "start": "2024-01-04", "end": "2024-01-06", "guest": "Ada" },
            { "start": "2024-01-10", "end": "2024-01-15", "title": "Conference group", "color": "#F59E0B" }
        ]},
        { "id": 102, "name": "Room 102", "series": [] },
        { "id": "suite", "name": "Garden Suite", "series": [
            { "start": "2024-02-29", "end": "2024-03-03", "cssClass": "vip" },
            { "start": "someday", "end": "2024-03-10" }
        ]}
    ]"##;
}
