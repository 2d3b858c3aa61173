use super::codec::{parse_entry_date, parse_time24, FormatError};
use super::date::{CalendarDate, TimeOfDay};
use std::fmt;
use thiserror::Error;

/// Ordinal task identifier, assigned monotonically by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejected add/edit form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("please fill in the {0} field")]
    MissingField(&'static str),
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Validated task fields, used for both adding and editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub date: CalendarDate,
    pub time: TimeOfDay,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, date: CalendarDate, time: TimeOfDay) -> Self {
        Self {
            title: title.into(),
            date,
            time,
        }
    }

    /// Validate raw form text: a title, a `YYYY-MM-DD` date and an `HH:MM`
    /// time, all required.
    pub fn from_form(title: &str, date: &str, time: &str) -> Result<Self, DraftError> {
        let title = title.trim();
        for (name, value) in [("title", title), ("date", date), ("time", time)] {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(name));
            }
        }

        Ok(Self {
            title: title.to_string(),
            date: parse_entry_date(date)?,
            time: parse_time24(time)?,
        })
    }
}

/// A to-do entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Deadline day
    pub date: CalendarDate,
    /// Deadline time on that day
    pub time: TimeOfDay,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            date: draft.date,
            time: draft.time,
            completed: false,
        }
    }

    /// Overwrite the editable fields, keeping identity and completion
    pub fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.date = draft.date;
        self.time = draft.time;
    }

    /// Flip the completed flag and return the new value
    pub fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft::new(
            title,
            CalendarDate::from_ymd(2024, 3, 15).unwrap(),
            TimeOfDay::from_hm(9, 0).unwrap(),
        )
    }

    #[test]
    fn test_from_form_parses_entry_formats() {
        let draft = TaskDraft::from_form("  Buy milk ", "2024-03-15", "09:00").unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.date, CalendarDate::from_ymd(2024, 3, 15).unwrap());
        assert_eq!(draft.time, TimeOfDay::from_hm(9, 0).unwrap());
    }

    #[test]
    fn test_from_form_requires_every_field() {
        assert_eq!(
            TaskDraft::from_form("", "2024-03-15", "09:00"),
            Err(DraftError::MissingField("title"))
        );
        assert_eq!(
            TaskDraft::from_form("Task", "  ", "09:00"),
            Err(DraftError::MissingField("date"))
        );
        assert_eq!(
            TaskDraft::from_form("Task", "2024-03-15", ""),
            Err(DraftError::MissingField("time"))
        );
    }

    #[test]
    fn test_from_form_surfaces_format_errors() {
        let err = TaskDraft::from_form("Task", "15/03/2024", "09:00").unwrap_err();
        assert!(matches!(err, DraftError::Format(FormatError::FieldCount { .. })));

        let err = TaskDraft::from_form("Task", "2024-03-15", "9am").unwrap_err();
        assert!(matches!(err, DraftError::Format(_)));
    }

    #[test]
    fn test_task_new_starts_incomplete() {
        let task = Task::new(TaskId(1), draft("Write report"));
        assert_eq!(task.id, TaskId(1));
        assert_eq!(task.title, "Write report");
        assert!(!task.completed);
    }

    #[test]
    fn test_apply_keeps_id_and_completion() {
        let mut task = Task::new(TaskId(7), draft("Old"));
        task.toggle_completed();

        let mut edit = draft("New");
        edit.time = TimeOfDay::from_hm(18, 45).unwrap();
        task.apply(edit);

        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.title, "New");
        assert_eq!(task.time, TimeOfDay::from_hm(18, 45).unwrap());
        assert!(task.completed);
    }

    #[test]
    fn test_toggle_completed() {
        let mut task = Task::new(TaskId(1), draft("Task"));
        assert!(task.toggle_completed());
        assert!(!task.toggle_completed());
    }
}
