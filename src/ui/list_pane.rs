use crate::app::AppState;
use crate::ui::styles::{
    border_style, completed_style, deadline_style, default_style, done_style, due_today_style,
    hint_style, selected_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use todue::domain::{empty_state_text, task_line, Task};

/// Build the display line for one task
fn create_task_line(app: &AppState, task: &Task) -> Line<'static> {
    let view = task_line(task, app.clock);

    let marker_style = if view.completed { done_style() } else { default_style() };
    let text_style = if view.completed { completed_style() } else { default_style() };
    let when_style = if task.date == app.today && !view.completed {
        due_today_style()
    } else {
        deadline_style()
    };

    Line::from(vec![
        Span::styled(format!(" {} ", view.marker), marker_style),
        Span::styled(view.title, text_style),
        Span::raw("  "),
        Span::styled(view.when, when_style),
    ])
}

/// Render the task list for the current filter
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let tasks = app.visible_tasks();
    let title = format!(
        " {} ({} of {}) ",
        app.filter.label(),
        tasks.len(),
        app.repo.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if tasks.is_empty() {
        let placeholder = Paragraph::new(empty_state_text(app.filter, app.repo.len()))
            .style(hint_style())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(app, task);
            let item = ListItem::new(line);
            if idx == app.selected_index {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
