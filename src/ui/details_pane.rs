use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, done_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use todue::domain::{week_number, when_text};

/// Render the details pane for the selected task
pub fn render_details_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Details ", title_style()));

    let Some(task) = app.selected_task() else {
        f.render_widget(Paragraph::new("No task selected").block(block), area);
        return;
    };

    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Title: ", title_style()),
        Span::raw(task.title.clone()),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::from(vec![
        Span::styled("Due:    ", title_style()),
        Span::raw(when_text(task, app.clock)),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Week:   ", title_style()),
        Span::raw(format!(
            "{} ({})",
            week_number(task.date, app.week_rule),
            app.week_rule.name()
        )),
    ]));

    lines.push(Line::from(vec![
        Span::styled("Day:    ", title_style()),
        Span::raw(format!("{} of the year", task.date.day_of_year() + 1)),
    ]));

    let (status, status_style) = if task.completed {
        ("Completed", done_style())
    } else {
        ("Open", default_style())
    };
    lines.push(Line::from(vec![
        Span::styled("Status: ", title_style()),
        Span::styled(status, status_style),
    ]));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
