use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows of the add/edit form, borders included
const FORM_HEIGHT: u16 = 16;

/// Screen regions, top to bottom: hint bar, filter tabs, then the task list
/// beside the details pane
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub filter_area: Rect,
    pub list_area: Rect,
    pub details_area: Rect,
}

pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(rows[2]);

    MainLayout {
        keybindings_area: rows[0],
        filter_area: rows[1],
        list_area: body[0],
        details_area: body[1],
    }
}

/// Box of `height` rows and `percent_x` of the width, centred in `area`.
/// The height is clipped to what `area` can hold.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = (area.height - height) / 2;
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    let left = (area.width - width) / 2;
    Rect::new(area.x + left, area.y + top, width, height)
}

/// Area for the add/edit form
pub fn create_modal_area(area: Rect) -> Rect {
    centered(area, 60, FORM_HEIGHT)
}
