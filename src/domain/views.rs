use super::enums::{ClockStyle, DeadlineFilter};
use super::item::Task;

/// Display projection of a task for the list pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLine {
    pub marker: &'static str,
    pub title: String,
    /// `H:MM AM/PM, DD/MM/YYYY`
    pub when: String,
    pub completed: bool,
}

/// Render a task into display text. Nothing reads this text back.
pub fn task_line(task: &Task, clock: ClockStyle) -> TaskLine {
    TaskLine {
        marker: completion_marker(task.completed),
        title: task.title.clone(),
        when: when_text(task, clock),
        completed: task.completed,
    }
}

/// `H:MM AM/PM, DD/MM/YYYY`
pub fn when_text(task: &Task, clock: ClockStyle) -> String {
    format!("{}, {}", clock.format_time(task.time), task.date)
}

pub fn completion_marker(completed: bool) -> &'static str {
    if completed {
        "✓"
    } else {
        "○"
    }
}

/// Placeholder shown when a filter leaves nothing visible
pub fn empty_state_text(filter: DeadlineFilter, total: usize) -> &'static str {
    if total == 0 {
        return "No tasks to show.";
    }
    match filter {
        DeadlineFilter::All => "No tasks to show.",
        DeadlineFilter::Today => "Nothing due today.",
        DeadlineFilter::ThisWeek => "Nothing due this week.",
        DeadlineFilter::Completed => "No completed tasks yet.",
    }
}
