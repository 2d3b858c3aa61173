use crate::app::AppState;
use crate::ui::styles::{active_tab_style, border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};
use todue::domain::DeadlineFilter;

/// Render the deadline selector with today's date on the right
pub fn render_filter_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let titles: Vec<Line> = DeadlineFilter::all()
        .iter()
        .map(|filter| Line::from(format!("{} {}", filter.index(), filter.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.filter.index())
        .style(default_style())
        .highlight_style(active_tab_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Deadline ", title_style()))
                .title(
                    ratatui::widgets::block::Title::from(Span::styled(
                        format!(" Today: {} ", app.today),
                        title_style(),
                    ))
                    .alignment(ratatui::layout::Alignment::Right),
                ),
        );

    f.render_widget(tabs, area);
}
