//! Deadline filtering and date/time handling for a to-do list.
//!
//! The [`domain`] module holds the task model, the display/entry codec and
//! the classifier; [`config`] and [`logging`] carry the settings and log
//! setup shared with the terminal front-end.

pub mod config;
pub mod domain;
pub mod logging;

pub use config::AppConfig;
pub use domain::{
    classify, CalendarDate, DeadlineFilter, FormatError, Task, TaskId, TaskRepository, TimeOfDay,
};
