use crate::app::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todue::domain::{DeadlineFilter, UiMode};

/// Handle keyboard input events
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::EditingTask => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Deadline filter
        KeyCode::Char('f') | KeyCode::Tab => {
            app.cycle_filter();
            Ok(false)
        }
        KeyCode::Char('F') | KeyCode::BackTab => {
            app.cycle_filter_back();
            Ok(false)
        }
        KeyCode::Char(c @ '0'..='3') => {
            let index = c as usize - '0' as usize;
            if let Some(filter) = DeadlineFilter::from_index(index) {
                app.set_filter(filter);
            }
            Ok(false)
        }

        // Task actions
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_task();
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_completed_selected()?;
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            app.remove_selected()?;
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in input form mode (adding or editing a task)
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form()?;
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Switch between title, date and time
        KeyCode::Tab => {
            app.input_form_toggle_field();
            Ok(false)
        }

        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todue::domain::{
        CalendarDate, ClockStyle, TaskDraft, TaskId, TaskRepository, TimeOfDay, WeekRule,
    };

    fn create_test_app() -> AppState {
        let today = CalendarDate::from_ymd(2024, 3, 15).unwrap();
        let mut repo = TaskRepository::new();
        repo.add_task(TaskDraft::new("Test task", today, TimeOfDay::from_hm(9, 0).unwrap()));
        AppState::new(repo, DeadlineFilter::All, WeekRule::Legacy, ClockStyle::Standard, today)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_navigation() {
        let mut app = create_test_app();
        let today = app.today;
        app.add_task(TaskDraft::new("Task 2", today, TimeOfDay::from_hm(10, 0).unwrap()));

        assert_eq!(app.selected_index, 0);

        handle_key(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.selected_index, 1);

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_filter_keys() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('f'))).unwrap();
        assert_eq!(app.filter, DeadlineFilter::Today);

        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.filter, DeadlineFilter::Completed);

        handle_key(&mut app, key(KeyCode::Char('0'))).unwrap();
        assert_eq!(app.filter, DeadlineFilter::All);
    }

    #[test]
    fn test_handle_add_task() {
        let mut app = create_test_app();
        let initial_count = app.repo.len();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());

        // Typing 'q' in the form must not quit
        type_text(&mut app, "Pay quarterly tax");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "2024-03-31");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "17:00");

        let should_quit = handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!should_quit);
        assert_eq!(app.repo.len(), initial_count + 1);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
        assert_eq!(app.repo.get(TaskId(2)).unwrap().title, "Pay quarterly tax");
    }

    #[test]
    fn test_handle_complete_and_remove() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Char('d'))).unwrap();
        assert!(app.repo.get(TaskId(1)).unwrap().completed);

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert!(app.repo.is_empty());
    }

    #[test]
    fn test_handle_escape_cancels_edit() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('e'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingTask);

        type_text(&mut app, " changed");
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.repo.get(TaskId(1)).unwrap().title, "Test task");
    }
}
