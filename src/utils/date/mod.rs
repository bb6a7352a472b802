// Date utility functions
// Whole-day arithmetic and lenient date parsing for the timeline axis

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Weekday};

/// Formats tried, in order, for plain date strings.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Formats tried for date-time strings without an offset.
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Count the whole days from `start` to `end`.
///
/// Returns 0 when either date is undefined or when `end` is not after `start`.
///
/// # Examples
/// ```
/// use bookings_timeline::utils::date::days_between;
/// use chrono::NaiveDate;
///
/// let a = NaiveDate::from_ymd_opt(2024, 1, 30);
/// let b = NaiveDate::from_ymd_opt(2024, 2, 2);
/// assert_eq!(days_between(a, b), 3);
/// assert_eq!(days_between(b, a), 0);
/// assert_eq!(days_between(a, None), 0);
/// ```
pub fn days_between(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_days().max(0),
        _ => 0,
    }
}

/// Saturday and Sunday are weekend days.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Widest distance, in days, between two dates chrono can represent.
pub fn max_day_span() -> i64 {
    (NaiveDate::MAX - NaiveDate::MIN).num_days()
}

/// Shift a date by a signed number of days, saturating at chrono's supported range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let span = max_day_span();
    let days = days.clamp(-span, span);
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(if days >= 0 { NaiveDate::MAX } else { NaiveDate::MIN })
}

/// Parse an ISO-ish date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, naive date-times and RFC 3339
/// timestamps. A timestamp with an offset keeps the calendar date written in it, so the
/// result never depends on the machine's timezone.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(date_time.date());
        }
    }

    log::debug!("Unparseable date '{}' treated as undefined", trimmed);
    None
}

/// A date as handed over by the host: either a native value or text to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl DateInput {
    /// Resolve to a calendar date, or `None` if the text is not a date.
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            DateInput::Date(date) => Some(*date),
            DateInput::Text(text) => parse_date(text),
        }
    }

    /// Like [`DateInput::resolve`], but an unparseable value is an error.
    pub fn require(&self) -> crate::error::Result<NaiveDate> {
        self.resolve().ok_or_else(|| {
            crate::error::TimelineError::InvalidDate(match self {
                DateInput::Date(date) => date.to_string(),
                DateInput::Text(text) => text.clone(),
            })
        })
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(date_time: NaiveDateTime) -> Self {
        DateInput::Date(date_time.date())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(date_time: DateTime<Tz>) -> Self {
        DateInput::Date(date_time.date_naive())
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

/// Serde adapter writing `Option<NaiveDate>` fields as `YYYY-MM-DD`.
pub mod iso_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }
}
