//! Date and time normalization for display and form population.
//!
//! The remote API is not consistent about temporal scalars: the same field
//! may arrive as an ISO date string, an epoch-millisecond number, an
//! epoch-millisecond numeric string, or a free-form date string. The view
//! layer needs two canonical renderings (day/month/year for tables,
//! year-month-day for `<input type="date">` population) plus sentinels that
//! distinguish "absent" from "present but unparseable".
//!
//! Epoch-millisecond values are interpreted in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use super::{RawDate, RawTime};

/// Sentinel rendered for absent dates and times.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel rendered for non-empty but unparseable dates.
pub const INVALID_DATE: &str = "invalid";

/// Sentinel rendered for unrecognized time shapes.
pub const UNKNOWN_TIME_FORMAT: &str = "unknown format";

/// A normalized calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    /// No value was provided (absent or empty).
    Absent,
    /// A non-empty value that could not be parsed.
    Invalid,
    /// A parsed calendar day.
    Day(NaiveDate),
}

impl DateValue {
    /// Normalize a raw wire date.
    ///
    /// Accepts ISO `YYYY-MM-DD`, epoch-millisecond numbers and numeric
    /// strings, and a handful of free-form date shapes. Absent or empty
    /// input maps to [`DateValue::Absent`]; anything non-empty that fails
    /// every parse maps to [`DateValue::Invalid`].
    pub fn parse(raw: Option<&RawDate>) -> Self {
        match raw {
            None => DateValue::Absent,
            Some(RawDate::Millis(ms)) => Self::from_epoch_millis(*ms),
            Some(RawDate::Text(text)) => Self::parse_text(text),
        }
    }

    fn parse_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return DateValue::Absent;
        }

        if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return DateValue::Day(day);
        }

        if is_numeric(text) {
            if let Ok(ms) = text.parse::<i64>() {
                return Self::from_epoch_millis(ms);
            }
            return DateValue::Invalid;
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return DateValue::Day(dt.with_timezone(&Utc).date_naive());
        }
        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
                return DateValue::Day(dt.date());
            }
        }
        for format in ["%Y/%m/%d", "%d/%m/%Y"] {
            if let Ok(day) = NaiveDate::parse_from_str(text, format) {
                return DateValue::Day(day);
            }
        }

        DateValue::Invalid
    }

    fn from_epoch_millis(ms: i64) -> Self {
        match DateTime::from_timestamp_millis(ms) {
            Some(dt) => DateValue::Day(dt.date_naive()),
            None => DateValue::Invalid,
        }
    }

    /// Table rendering: `DD/MM/YYYY`, [`NOT_AVAILABLE`] or [`INVALID_DATE`].
    pub fn display(&self) -> String {
        match self {
            DateValue::Absent => NOT_AVAILABLE.to_string(),
            DateValue::Invalid => INVALID_DATE.to_string(),
            DateValue::Day(day) => day.format("%d/%m/%Y").to_string(),
        }
    }

    /// Edit-form rendering: `YYYY-MM-DD`, or empty when there is no day.
    ///
    /// Parsing this output again yields the same day, so populating a form
    /// and saving it back is lossless.
    pub fn input_value(&self) -> String {
        match self {
            DateValue::Day(day) => day.format("%Y-%m-%d").to_string(),
            _ => String::new(),
        }
    }

    /// Ordering key for the dashboard sort, descending by recency.
    ///
    /// Absent and invalid dates take the epoch value so they sort as the
    /// oldest entries.
    pub fn sort_key(&self) -> i64 {
        match self {
            DateValue::Day(day) => day.and_time(NaiveTime::MIN).and_utc().timestamp_millis(),
            _ => 0,
        }
    }

    /// The parsed day, when there is one.
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            DateValue::Day(day) => Some(*day),
            _ => None,
        }
    }
}

/// A normalized departure time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeValue {
    /// No value was provided (absent or empty).
    Absent,
    /// A non-empty value in no recognized shape.
    Unknown,
    /// Hour and minute, both in range.
    HourMinute(u32, u32),
}

impl TimeValue {
    /// Normalize a raw wire time.
    ///
    /// Accepts `H:M`, `HH:MM` and `HH:MM:SS` with one- or two-digit hour
    /// and minute fields, plus epoch-millisecond numbers and numeric
    /// strings. Unrecognized shapes map to [`TimeValue::Unknown`] rather
    /// than failing.
    pub fn parse(raw: Option<&RawTime>) -> Self {
        match raw {
            None => TimeValue::Absent,
            Some(RawTime::Millis(ms)) => Self::from_epoch_millis(*ms),
            Some(RawTime::Text(text)) => Self::parse_text(text),
        }
    }

    fn parse_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return TimeValue::Absent;
        }

        if text.contains(':') {
            let mut parts = text.split(':');
            let hour = parts.next().and_then(|p| parse_clock_field(p, 24));
            let minute = parts.next().and_then(|p| parse_clock_field(p, 60));
            // A third field (seconds) is accepted and dropped; anything
            // beyond that is not a clock reading.
            let seconds_ok = match parts.next() {
                None => true,
                Some(p) => parse_clock_field(p, 60).is_some() && parts.next().is_none(),
            };
            return match (hour, minute, seconds_ok) {
                (Some(h), Some(m), true) => TimeValue::HourMinute(h, m),
                _ => TimeValue::Unknown,
            };
        }

        if is_numeric(text) {
            if let Ok(ms) = text.parse::<i64>() {
                return Self::from_epoch_millis(ms);
            }
        }

        TimeValue::Unknown
    }

    fn from_epoch_millis(ms: i64) -> Self {
        match DateTime::from_timestamp_millis(ms) {
            Some(dt) => TimeValue::HourMinute(dt.hour(), dt.minute()),
            None => TimeValue::Unknown,
        }
    }

    /// Table rendering: zero-padded `HH:MM`, [`NOT_AVAILABLE`] or
    /// [`UNKNOWN_TIME_FORMAT`].
    pub fn display(&self) -> String {
        match self {
            TimeValue::Absent => NOT_AVAILABLE.to_string(),
            TimeValue::Unknown => UNKNOWN_TIME_FORMAT.to_string(),
            TimeValue::HourMinute(h, m) => format!("{:02}:{:02}", h, m),
        }
    }
}

fn parse_clock_field(field: &str, bound: u32) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse::<u32>().ok().filter(|v| *v < bound)
}

fn is_numeric(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
