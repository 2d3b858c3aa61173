use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Push a labelled field with a cursor when it is being edited
fn push_field<'a>(lines: &mut Vec<Line<'a>>, label: &'a str, value: &'a str, editing: bool) {
    if editing {
        lines.push(Line::raw(format!("{label} (editing)")));
    } else {
        lines.push(Line::raw(label));
    }
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]));
    lines.push(Line::raw(""));
}

/// Render the input form for adding or editing a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title_text = if form.editing.is_some() {
            " Edit Task "
        } else {
            " Add Task "
        };

        let mut lines = Vec::new();
        lines.push(Line::raw(""));
        push_field(&mut lines, "Title:", &form.title, form.editing_field == 0);
        push_field(&mut lines, "Date (YYYY-MM-DD):", &form.date, form.editing_field == 1);
        push_field(&mut lines, "Time (HH:MM, 24h):", &form.time, form.editing_field == 2);

        if let Some(error) = &form.error {
            lines.push(Line::styled(error.as_str(), error_style()));
        } else {
            lines.push(Line::raw(""));
        }
        lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title_text, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
