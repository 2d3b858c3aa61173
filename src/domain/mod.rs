pub mod classify;
pub mod codec;
pub mod date;
pub mod enums;
pub mod item;
pub mod repository;
pub mod views;

pub use classify::{classify, classify_with, matches, same_week, week_number, Schedule, TaskRow};
pub use codec::{
    format_calendar_date, format_entry_date, format_time12, format_time24, parse_display_date,
    parse_entry_date, parse_time12, parse_time24, FormatError, FormatResult,
};
pub use date::{CalendarDate, TimeOfDay};
pub use enums::{ClockStyle, DeadlineFilter, UiMode, WeekRule};
pub use item::{DraftError, Task, TaskDraft, TaskId};
pub use repository::{RepoError, RepoResult, TaskRepository};
pub use views::{completion_marker, empty_state_text, task_line, when_text, TaskLine};
