use chrono::{Datelike, Local, NaiveDate, NaiveTime, Timelike};
use std::fmt;

/// Earliest and latest years a `CalendarDate` may carry.
///
/// Keeps every date representable as unsigned `DD/MM/YYYY` text.
pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// A civil date (year, 1-based month, day) with no time or timezone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a year, 1-based month and day. Returns `None` for
    /// impossible dates such as 31/02.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Today's date from the local wall clock
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1 = January
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Zero-based count of days elapsed since January 1 of the same year
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal0()
    }

    /// Weekday of this date, 0 = Sunday
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Weekday of January 1 of this date's year, 0 = Sunday
    pub fn first_weekday_of_year(&self) -> u32 {
        (self.weekday_from_sunday() + 7 - self.day_of_year() % 7) % 7
    }

    /// ISO-8601 (week-year, week) pair
    pub fn iso_week(&self) -> (i32, u32) {
        let week = self.0.iso_week();
        (week.year(), week.week())
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::codec::format_calendar_date(*self))
    }
}

/// An (hour, minute) pair in 24-hour form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Returns `None` unless `hour < 24` and `minute < 60`
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&super::codec::format_time24(*self))
    }
}
