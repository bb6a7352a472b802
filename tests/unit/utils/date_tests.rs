// Unit tests for the date helpers shared by layout and parsing

use bookings_timeline::utils::date::{add_days, days_between, is_weekend, parse_date, DateInput};
use bookings_timeline::TimelineError;
use chrono::NaiveDate;
use test_case::test_case;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test_case(2024, 2, 3, true ; "saturday")]
#[test_case(2024, 2, 4, true ; "sunday")]
#[test_case(2024, 2, 5, false ; "monday")]
#[test_case(2024, 2, 9, false ; "friday")]
#[test_case(2024, 12, 28, true ; "saturday at year end")]
fn test_is_weekend(year: i32, month: u32, day: u32, expected: bool) {
    assert_eq!(is_weekend(ymd(year, month, day)), expected);
}

#[test_case((2024, 1, 30), (2024, 2, 2), 3 ; "across month change")]
#[test_case((2024, 2, 28), (2024, 3, 1), 2 ; "across leap day")]
#[test_case((2023, 12, 31), (2024, 1, 1), 1 ; "across year change")]
#[test_case((2024, 1, 1), (2024, 1, 1), 0 ; "same day")]
#[test_case((2024, 3, 1), (2024, 2, 1), 0 ; "reversed is zero")]
fn test_days_between(start: (i32, u32, u32), end: (i32, u32, u32), expected: i64) {
    let start = ymd(start.0, start.1, start.2);
    let end = ymd(end.0, end.1, end.2);
    assert_eq!(days_between(Some(start), Some(end)), expected);
}

#[test]
fn test_days_between_undefined() {
    assert_eq!(days_between(None, Some(ymd(2024, 1, 1))), 0);
    assert_eq!(days_between(Some(ymd(2024, 1, 1)), None), 0);
    assert_eq!(days_between(None, None), 0);
}

#[test_case("2024-02-29", Some((2024, 2, 29)) ; "iso date")]
#[test_case("2024/03/01", Some((2024, 3, 1)) ; "slashed date")]
#[test_case("  2024-03-01 ", Some((2024, 3, 1)) ; "surrounding whitespace")]
#[test_case("2024-03-01T10:30:00", Some((2024, 3, 1)) ; "naive date time")]
#[test_case("2024-03-01 23:59:59", Some((2024, 3, 1)) ; "spaced date time")]
#[test_case("2024-03-01T23:30:00-05:00", Some((2024, 3, 1)) ; "offset keeps written date")]
#[test_case("2024-03-01T00:30:00Z", Some((2024, 3, 1)) ; "utc timestamp")]
#[test_case("2023-02-29", None ; "no leap day in 2023")]
#[test_case("", None ; "empty")]
#[test_case("tomorrow", None ; "word")]
fn test_parse_date(input: &str, expected: Option<(i32, u32, u32)>) {
    assert_eq!(parse_date(input), expected.map(|(y, m, d)| ymd(y, m, d)));
}

#[test]
fn test_add_days_saturates() {
    assert_eq!(add_days(ymd(2024, 1, 30), 2), ymd(2024, 2, 1));
    assert_eq!(add_days(ymd(2024, 3, 1), -1), ymd(2024, 2, 29));
    assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
    assert_eq!(add_days(NaiveDate::MIN, -1), NaiveDate::MIN);
}

#[test]
fn test_date_input_require() {
    assert_eq!(DateInput::from("2024-01-05").require(), Ok(ymd(2024, 1, 5)));
    assert_eq!(
        DateInput::from("soon").require(),
        Err(TimelineError::InvalidDate("soon".to_string()))
    );
}
