use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

use forgeiq_domain::Emphasis;

pub(crate) fn emphasis_color(emphasis: Emphasis) -> Color {
    match emphasis {
        Emphasis::Neutral => Color::Gray,
        Emphasis::Positive => Color::LightGreen,
        Emphasis::Info => Color::LightBlue,
        Emphasis::Caution => Color::Yellow,
        Emphasis::Warning => Color::LightRed,
        Emphasis::Danger => Color::Red,
    }
}

/// Rect of `percent_x` by `percent_y` centered in `area`.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}
