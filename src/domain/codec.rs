//! Conversions between typed dates/times and the text shown or entered.
//!
//! Display formats are `DD/MM/YYYY` and `H:MM AM/PM`; form entry uses
//! `YYYY-MM-DD` and `HH:MM`. Every parser rejects malformed input with a
//! [`FormatError`] rather than guessing.

use super::date::{CalendarDate, TimeOfDay};
use super::enums::ClockStyle;
use thiserror::Error;

/// Malformed date or time text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected {expected} `{separator}`-separated fields in `{input}`, found {found}")]
    FieldCount {
        input: String,
        separator: char,
        expected: usize,
        found: usize,
    },
    #[error("`{value}` is not a valid {field}")]
    NotNumeric { field: &'static str, value: String },
    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: u32 },
    #[error("`{input}` is not a real calendar date")]
    InvalidDate { input: String },
    #[error("expected an AM or PM suffix in `{input}`")]
    Meridiem { input: String },
}

pub type FormatResult<T> = Result<T, FormatError>;

/// Parse `DD/MM/YYYY`. One-digit day and month are accepted.
pub fn parse_display_date(text: &str) -> FormatResult<CalendarDate> {
    let [day, month, year] = split_fields::<3>(text, '/')?;
    let day = parse_number("day", day)?;
    let month = parse_number("month", month)?;
    let year = parse_number("year", year)?;
    build_date(text, year, month, day)
}

/// Format as `DD/MM/YYYY` with day and month zero-padded
pub fn format_calendar_date(date: CalendarDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// Parse the form-entry date `YYYY-MM-DD`
pub fn parse_entry_date(text: &str) -> FormatResult<CalendarDate> {
    let [year, month, day] = split_fields::<3>(text, '-')?;
    let year = parse_number("year", year)?;
    let month = parse_number("month", month)?;
    let day = parse_number("day", day)?;
    build_date(text, year, month, day)
}

/// Format as the form-entry date `YYYY-MM-DD`
pub fn format_entry_date(date: CalendarDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Parse a 24-hour `HH:MM` time
pub fn parse_time24(text: &str) -> FormatResult<TimeOfDay> {
    let [hour, minute] = split_fields::<2>(text, ':')?;
    let hour = parse_number("hour", hour)?;
    let minute = parse_number("minute", minute)?;
    build_time(hour, minute)
}

/// Format as a 24-hour `HH:MM` time
pub fn format_time24(time: TimeOfDay) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Format as `H:MM AM/PM` on the standard wall clock
pub fn format_time12(time: TimeOfDay) -> String {
    ClockStyle::Standard.format_time(time)
}

/// Parse `H:MM AM/PM` on the standard wall clock
pub fn parse_time12(text: &str) -> FormatResult<TimeOfDay> {
    ClockStyle::Standard.parse_time(text)
}

impl ClockStyle {
    /// Format a time as `H:MM AM/PM` in this style
    pub fn format_time(&self, time: TimeOfDay) -> String {
        let hour = time.hour();
        let (display_hour, suffix) = match self {
            ClockStyle::Standard => match hour {
                0 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                _ => (hour - 12, "PM"),
            },
            ClockStyle::Legacy => {
                if hour > 12 {
                    (hour - 12, "PM")
                } else {
                    (hour, "AM")
                }
            }
        };
        format!("{}:{:02} {}", display_hour, time.minute(), suffix)
    }

    /// Parse `H:MM AM/PM` in this style
    pub fn parse_time(&self, text: &str) -> FormatResult<TimeOfDay> {
        let trimmed = text.trim();
        let (clock, is_pm) = if let Some(rest) = strip_suffix_ignore_case(trimmed, "AM") {
            (rest, false)
        } else if let Some(rest) = strip_suffix_ignore_case(trimmed, "PM") {
            (rest, true)
        } else {
            return Err(FormatError::Meridiem {
                input: text.to_string(),
            });
        };

        let [hour, minute] = split_fields::<2>(clock, ':')?;
        let hour = parse_number("hour", hour)?;
        let minute = parse_number("minute", minute)?;

        let hour = match self {
            ClockStyle::Standard => {
                if !(1..=12).contains(&hour) {
                    return Err(FormatError::OutOfRange { field: "hour", value: hour });
                }
                match (hour, is_pm) {
                    (12, false) => 0,
                    (12, true) => 12,
                    (h, false) => h,
                    (h, true) => h + 12,
                }
            }
            ClockStyle::Legacy => {
                if is_pm {
                    hour.saturating_add(12)
                } else {
                    hour
                }
            }
        };
        build_time(hour, minute)
    }
}

fn split_fields<const N: usize>(text: &str, separator: char) -> FormatResult<[&str; N]> {
    let parts: Vec<&str> = text.trim().split(separator).collect();
    let found = parts.len();
    parts.try_into().map_err(|_| FormatError::FieldCount {
        input: text.to_string(),
        separator,
        expected: N,
        found,
    })
}

fn parse_number(field: &'static str, text: &str) -> FormatResult<u32> {
    let digits = text.trim();
    let not_numeric = || FormatError::NotNumeric {
        field,
        value: digits.to_string(),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_numeric());
    }
    digits.parse().map_err(|_| not_numeric())
}

fn build_date(input: &str, year: u32, month: u32, day: u32) -> FormatResult<CalendarDate> {
    if !(1..=12).contains(&month) {
        return Err(FormatError::OutOfRange { field: "month", value: month });
    }
    if !(1..=31).contains(&day) {
        return Err(FormatError::OutOfRange { field: "day", value: day });
    }
    let year = i32::try_from(year).map_err(|_| FormatError::OutOfRange { field: "year", value: year })?;
    CalendarDate::from_ymd(year, month, day).ok_or_else(|| FormatError::InvalidDate {
        input: input.trim().to_string(),
    })
}

fn build_time(hour: u32, minute: u32) -> FormatResult<TimeOfDay> {
    if hour > 23 {
        return Err(FormatError::OutOfRange { field: "hour", value: hour });
    }
    if minute > 59 {
        return Err(FormatError::OutOfRange { field: "minute", value: minute });
    }
    TimeOfDay::from_hm(hour, minute).ok_or(FormatError::OutOfRange { field: "hour", value: hour })
}

fn strip_suffix_ignore_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    if !text.is_char_boundary(split) {
        return None;
    }
    let (head, tail) = text.split_at(split);
    tail.eq_ignore_ascii_case(suffix).then_some(head)
}
