use ratatui::style::{Color, Modifier, Style};

fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

fn bold(color: Color) -> Style {
    fg(color).add_modifier(Modifier::BOLD)
}

pub fn default_style() -> Style {
    fg(Color::White)
}

/// Highlighted row in the task list
pub fn selected_style() -> Style {
    bold(Color::Black).bg(Color::LightCyan)
}

/// Title of a completed task: dimmed and struck through
pub fn completed_style() -> Style {
    fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
}

/// The ✓ marker and the "Completed" status
pub fn done_style() -> Style {
    fg(Color::Green)
}

/// `H:MM AM/PM, DD/MM/YYYY` text of a task
pub fn deadline_style() -> Style {
    fg(Color::Gray)
}

/// Open task due today
pub fn due_today_style() -> Style {
    bold(Color::Yellow)
}

pub fn title_style() -> Style {
    bold(Color::Cyan)
}

pub fn border_style() -> Style {
    fg(Color::Gray)
}

/// Selected deadline filter tab
pub fn active_tab_style() -> Style {
    bold(Color::Black).bg(Color::Cyan)
}

pub fn modal_bg_style() -> Style {
    fg(Color::White).bg(Color::DarkGray)
}

pub fn modal_title_style() -> Style {
    bold(Color::Yellow)
}

pub fn hint_style() -> Style {
    fg(Color::DarkGray)
}

/// Validation message in the add/edit form
pub fn error_style() -> Style {
    bold(Color::Red)
}
