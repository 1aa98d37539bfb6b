use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use forgeiq_application::HeatmapEntry;
use forgeiq_domain::{Tiered, WEEKDAYS};

use crate::util::emphasis_color;

/// Failures per endpoint and weekday, each cell tinted by its heat level.
pub(crate) fn render_heatmap(frame: &mut Frame, area: Rect, heatmap: &[HeatmapEntry]) {
    let header = Row::new(
        std::iter::once(Cell::from("Endpoint")).chain(WEEKDAYS.iter().map(|day| Cell::from(*day))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = heatmap.iter().map(|entry| {
        let cells = entry
            .daily_failures
            .iter()
            .zip(entry.levels.iter())
            .map(|(failures, level)| {
                Cell::from(failures.to_string())
                    .style(Style::default().fg(Color::Black).bg(emphasis_color(level.emphasis())))
            });
        Row::new(std::iter::once(Cell::from(entry.endpoint.clone())).chain(cells))
    });

    let mut widths = vec![Constraint::Min(24)];
    widths.extend([Constraint::Length(5); 7]);
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Failure Heatmap"),
        );
    frame.render_widget(table, area);
}
