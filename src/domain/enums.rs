use serde::{Deserialize, Serialize};

/// Deadline criterion governing which tasks are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineFilter {
    #[default]
    All,
    Today,
    ThisWeek,
    Completed,
}

impl DeadlineFilter {
    /// Parse a filter name as used on the command line and in config files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "all" => Some(Self::All),
            "today" => Some(Self::Today),
            "this_week" | "week" => Some(Self::ThisWeek),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Filter for a selector position (0 = all .. 3 = completed)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Self::All => 0,
            Self::Today => 1,
            Self::ThisWeek => 2,
            Self::Completed => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Today => "Today",
            Self::ThisWeek => "This week",
            Self::Completed => "Completed",
        }
    }

    /// Next filter in selector order, wrapping around
    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    /// Previous filter in selector order, wrapping around
    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }

    /// Whether the filter depends on today's date
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Today | Self::ThisWeek)
    }

    pub fn all() -> &'static [DeadlineFilter] {
        &[
            DeadlineFilter::All,
            DeadlineFilter::Today,
            DeadlineFilter::ThisWeek,
            DeadlineFilter::Completed,
        ]
    }
}

/// How week numbers are computed for the "this week" filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekRule {
    /// `ceil((day_of_year + offset + 1) / 7)` where `offset` pads a year that
    /// does not start on Sunday or Monday up to the next week boundary.
    #[default]
    Legacy,
    /// ISO-8601 weeks (Monday start, week 1 holds the first Thursday)
    Iso8601,
}

impl WeekRule {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('-', "_").as_str() {
            "legacy" => Some(Self::Legacy),
            "iso" | "iso8601" | "iso_8601" => Some(Self::Iso8601),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Iso8601 => "iso8601",
        }
    }
}

/// 12-hour clock conventions for displayed times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// Wall-clock mapping: 00:xx is 12:xx AM, 12:xx is 12:xx PM
    #[default]
    Standard,
    /// Old display strings: hours up to 12 print unchanged as AM, so midnight
    /// shows as `0:xx AM` and noon as `12:xx AM`. Parsing adds 12 to any PM
    /// hour and rejects the resulting hour 24.
    Legacy,
}

impl ClockStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "standard" | "12h" => Some(Self::Standard),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingTask,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_name() {
        assert_eq!(DeadlineFilter::from_name("all"), Some(DeadlineFilter::All));
        assert_eq!(DeadlineFilter::from_name("TODAY"), Some(DeadlineFilter::Today));
        assert_eq!(DeadlineFilter::from_name("this-week"), Some(DeadlineFilter::ThisWeek));
        assert_eq!(DeadlineFilter::from_name("this_week"), Some(DeadlineFilter::ThisWeek));
        assert_eq!(DeadlineFilter::from_name("done"), Some(DeadlineFilter::Completed));
        assert_eq!(DeadlineFilter::from_name("tomorrow"), None);
    }

    #[test]
    fn test_filter_selector_positions() {
        for (i, filter) in DeadlineFilter::all().iter().enumerate() {
            assert_eq!(filter.index(), i);
            assert_eq!(DeadlineFilter::from_index(i), Some(*filter));
        }
        assert_eq!(DeadlineFilter::from_index(4), None);
    }

    #[test]
    fn test_filter_cycling_wraps() {
        assert_eq!(DeadlineFilter::All.next(), DeadlineFilter::Today);
        assert_eq!(DeadlineFilter::Completed.next(), DeadlineFilter::All);
        assert_eq!(DeadlineFilter::All.prev(), DeadlineFilter::Completed);
        assert_eq!(DeadlineFilter::ThisWeek.prev(), DeadlineFilter::Today);
    }

    #[test]
    fn test_filter_is_temporal() {
        assert!(!DeadlineFilter::All.is_temporal());
        assert!(DeadlineFilter::Today.is_temporal());
        assert!(DeadlineFilter::ThisWeek.is_temporal());
        assert!(!DeadlineFilter::Completed.is_temporal());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&DeadlineFilter::ThisWeek).unwrap(), "\"this_week\"");
        assert_eq!(serde_json::to_string(&WeekRule::Iso8601).unwrap(), "\"iso8601\"");
        let clock: ClockStyle = serde_json::from_str("\"legacy\"").unwrap();
        assert_eq!(clock, ClockStyle::Legacy);
    }

    #[test]
    fn test_rule_and_clock_names_round_trip() {
        for rule in [WeekRule::Legacy, WeekRule::Iso8601] {
            assert_eq!(WeekRule::from_name(rule.name()), Some(rule));
        }
        for clock in [ClockStyle::Standard, ClockStyle::Legacy] {
            assert_eq!(ClockStyle::from_name(clock.name()), Some(clock));
        }
    }
}
