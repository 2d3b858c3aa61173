//! Deadline filtering.
//!
//! Classification is a pure recomputation over the whole task collection;
//! it never fails. Anything whose deadline cannot be determined is visible
//! under `All` (and `Completed`, if completed) but never under a temporal
//! filter.

use super::codec::parse_display_date;
use super::date::CalendarDate;
use super::enums::{DeadlineFilter, WeekRule};
use super::item::{Task, TaskId};
use std::collections::BTreeSet;

/// Something that can be placed against a deadline filter
pub trait Schedule {
    fn task_id(&self) -> TaskId;
    /// The deadline day, or `None` when it is unknown
    fn deadline(&self) -> Option<CalendarDate>;
    fn is_completed(&self) -> bool;
}

impl Schedule for Task {
    fn task_id(&self) -> TaskId {
        self.id
    }

    fn deadline(&self) -> Option<CalendarDate> {
        Some(self.date)
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

/// A task as re-read from rendered text, whose date may not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    /// Date as displayed (`DD/MM/YYYY`)
    pub date_text: String,
    pub completed: bool,
}

impl Schedule for TaskRow {
    fn task_id(&self) -> TaskId {
        self.id
    }

    fn deadline(&self) -> Option<CalendarDate> {
        parse_display_date(&self.date_text).ok()
    }

    fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Week number of `date` under `rule`
///
/// `Legacy` numbers weeks as `ceil((day_of_year + offset + 1) / 7)`, with
/// `offset = 7 - first_weekday` when January 1 falls after Monday (weekday
/// 0 = Sunday) and 0 otherwise, so the weekday a week starts on shifts from
/// year to year.
pub fn week_number(date: CalendarDate, rule: WeekRule) -> u32 {
    match rule {
        WeekRule::Legacy => {
            let first = date.first_weekday_of_year();
            let offset = if first > 1 { 7 - first } else { 0 };
            // ceil(n / 7) with n = day_of_year + offset + 1
            (date.day_of_year() + offset + 7) / 7
        }
        WeekRule::Iso8601 => date.iso_week().1,
    }
}

/// Whether two dates fall in the same week under `rule`.
///
/// `Legacy` compares bare week numbers, so week 11 of 2023 matches week 11
/// of 2024. `Iso8601` compares the ISO week-year as well.
pub fn same_week(a: CalendarDate, b: CalendarDate, rule: WeekRule) -> bool {
    match rule {
        WeekRule::Legacy => week_number(a, rule) == week_number(b, rule),
        WeekRule::Iso8601 => a.iso_week() == b.iso_week(),
    }
}

/// Whether one item is visible under `filter`
pub fn matches<T: Schedule + ?Sized>(
    filter: DeadlineFilter,
    today: CalendarDate,
    rule: WeekRule,
    item: &T,
) -> bool {
    match filter {
        DeadlineFilter::All => true,
        DeadlineFilter::Completed => item.is_completed(),
        DeadlineFilter::Today => item.deadline() == Some(today),
        DeadlineFilter::ThisWeek => item
            .deadline()
            .is_some_and(|date| same_week(date, today, rule)),
    }
}

/// IDs of the items visible under `filter`, using the legacy week rule
pub fn classify<T: Schedule>(
    filter: DeadlineFilter,
    today: CalendarDate,
    tasks: &[T],
) -> BTreeSet<TaskId> {
    classify_with(WeekRule::Legacy, filter, today, tasks)
}

/// IDs of the items visible under `filter`
pub fn classify_with<T: Schedule>(
    rule: WeekRule,
    filter: DeadlineFilter,
    today: CalendarDate,
    tasks: &[T],
) -> BTreeSet<TaskId> {
    tasks
        .iter()
        .filter(|task| matches(filter, today, rule, *task))
        .map(|task| task.task_id())
        .collect()
}
