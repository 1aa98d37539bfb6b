use ratatui::{
    Frame,
    layout::{Constraint, Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, nav_items};

const HELP: [&str; 5] = [
    "j/k  switch view",
    "1-6  jump to view",
    "t    time range",
    "a    apply schedules",
    "q    quit",
];

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Rgb(16, 18, 22)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = crate::ui_layout_split!(
        Direction::Vertical,
        [
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(HELP.len() as u16 + 1),
        ],
        inner
    );

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            " ForgeIQ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" last {}", app.dashboard.state().range),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(brand, rows[0]);

    let active = app.active_view();
    let items: Vec<ListItem> = nav_items()
        .iter()
        .map(|item| {
            let style = if item.view == active {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", item.hotkey),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(item.label, style),
            ]))
        })
        .collect();
    let list = List::new(items).highlight_style(Style::default().bg(Color::Rgb(0, 70, 80)));
    let mut state = ListState::default().with_selected(Some(active.index()));
    frame.render_stateful_widget(list, rows[1], &mut state);

    let help: Vec<Line> = HELP
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                format!(" {line}"),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(help), rows[2]);
}
