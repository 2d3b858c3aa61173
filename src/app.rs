use anyhow::{Context, Result};
use todue::domain::{
    format_entry_date, format_time24, CalendarDate, ClockStyle, DeadlineFilter, Task, TaskDraft,
    TaskId, TaskRepository, UiMode, WeekRule,
};
use tracing::{info, warn};

/// Number of fields in the add/edit form (title, date, time)
const FORM_FIELDS: usize = 3;

/// Input form state for adding or editing a task
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    /// Task being edited, `None` when adding
    pub editing: Option<TaskId>,
    pub editing_field: usize, // 0 = title, 1 = date, 2 = time
    /// Validation message from the last submit
    pub error: Option<String>,
}

/// Main application state
pub struct AppState {
    pub repo: TaskRepository,
    pub filter: DeadlineFilter,
    pub today: CalendarDate,
    pub week_rule: WeekRule,
    pub clock: ClockStyle,
    /// IDs visible under the current filter, in list order
    pub visible: Vec<TaskId>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
}

impl AppState {
    pub fn new(
        repo: TaskRepository,
        filter: DeadlineFilter,
        week_rule: WeekRule,
        clock: ClockStyle,
        today: CalendarDate,
    ) -> Self {
        let mut app = Self {
            repo,
            filter,
            today,
            week_rule,
            clock,
            visible: Vec::new(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            input_form: None,
        };
        app.refresh();
        app
    }

    /// Recompute the visible list from scratch and keep the selection in range
    pub fn refresh(&mut self) {
        self.visible = self
            .repo
            .visible(self.filter, self.today, self.week_rule)
            .into_iter()
            .map(|task| task.id)
            .collect();
        if self.selected_index >= self.visible.len() {
            self.selected_index = self.visible.len().saturating_sub(1);
        }
    }

    /// Re-read the local date; reclassify if the day has changed
    pub fn tick(&mut self) {
        self.set_today(CalendarDate::today());
    }

    pub fn set_today(&mut self, today: CalendarDate) {
        if today != self.today {
            info!(from = %self.today, to = %today, "day changed");
            self.today = today;
            self.refresh();
        }
    }

    /// Visible tasks in list order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.visible.iter().filter_map(|id| self.repo.get(*id)).collect()
    }

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.visible.get(self.selected_index).copied()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_task_id().and_then(|id| self.repo.get(id))
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible.len() {
            self.selected_index += 1;
        }
    }

    pub fn set_filter(&mut self, filter: DeadlineFilter) {
        if filter != self.filter {
            info!(filter = filter.label(), "filter changed");
            self.filter = filter;
            self.selected_index = 0;
            self.refresh();
        }
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn cycle_filter_back(&mut self) {
        self.set_filter(self.filter.prev());
    }

    /// Toggle completion of the selected task
    pub fn toggle_completed_selected(&mut self) -> Result<()> {
        if let Some(id) = self.selected_task_id() {
            self.repo
                .toggle_completed(id)
                .context("Failed to toggle task completion")?;
            self.refresh();
        }
        Ok(())
    }

    /// Remove the selected task
    pub fn remove_selected(&mut self) -> Result<()> {
        if let Some(id) = self.selected_task_id() {
            self.repo.remove_task(id).context("Failed to remove task")?;
            self.refresh();
        }
        Ok(())
    }

    /// Start adding a new task (opens input form)
    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingTask;
    }

    /// Start editing the selected task, prefilled with its current values
    pub fn start_edit_task(&mut self) {
        let form = match self.selected_task() {
            Some(task) => InputFormState {
                title: task.title.clone(),
                date: format_entry_date(task.date),
                time: format_time24(task.time),
                editing: Some(task.id),
                editing_field: 0,
                error: None,
            },
            None => return,
        };
        self.input_form = Some(form);
        self.ui_mode = UiMode::EditingTask;
    }

    /// Move to the next field in the input form (title -> date -> time)
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % FORM_FIELDS;
        }
    }

    /// Add character to input form (current field)
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.title.push(c),
                1 => form.date.push(c),
                2 => form.time.push(c),
                _ => {}
            }
        }
    }

    /// Backspace in input form (current field)
    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => { form.title.pop(); },
                1 => { form.date.pop(); },
                2 => { form.time.pop(); },
                _ => {}
            }
        }
    }

    /// Validate and store the form. Invalid input keeps the form open with
    /// an error message and stores nothing.
    pub fn submit_input_form(&mut self) -> Result<()> {
        let Some(mut form) = self.input_form.take() else {
            return Ok(());
        };

        let draft = match TaskDraft::from_form(&form.title, &form.date, &form.time) {
            Ok(draft) => draft,
            Err(e) => {
                warn!(error = %e, "task form rejected");
                form.error = Some(e.to_string());
                self.input_form = Some(form);
                return Ok(());
            }
        };

        match form.editing {
            Some(id) => self.repo.update_task(id, draft).context("Failed to update task")?,
            None => {
                self.repo.add_task(draft);
            }
        }
        self.ui_mode = UiMode::Normal;
        self.refresh();
        Ok(())
    }

    /// Cancel input form
    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Add a task directly (for testing and programmatic use)
    pub fn add_task(&mut self, draft: TaskDraft) -> TaskId {
        let id = self.repo.add_task(draft);
        self.refresh();
        id
    }
}
