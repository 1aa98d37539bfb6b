use ratatui::{
    Frame,
    layout::{Constraint, Direction, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use forgeiq_application::ViewReport;
use forgeiq_ui_presentation::formatting::stat_cards;

use crate::app::App;
use crate::panels::cards::{CARD_HEIGHT, render_cards};
use crate::panels::heatmap::render_heatmap;
use crate::panels::report::render_report_lines;
use crate::util::centered_rect;

pub fn render_main(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.active_view();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", view.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Rgb(18, 20, 24)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = crate::ui_layout_split!(
        Direction::Vertical,
        [
            Constraint::Length(1),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ],
        inner
    );

    frame.render_widget(
        Paragraph::new(Span::styled(view.subtitle(), Style::default().fg(Color::Gray))),
        rows[0],
    );
    render_status(frame, rows[3], app);

    let Some(report) = &app.report else {
        render_error(frame, rows[2], app.error.as_deref());
        return;
    };
    render_cards(frame, rows[1], &stat_cards(report));

    match report {
        ViewReport::Analytics(analytics) if !analytics.heatmap.is_empty() => {
            let heat_height = analytics.heatmap.len() as u16 + 2;
            let body = crate::ui_layout_split!(
                Direction::Vertical,
                [Constraint::Min(3), Constraint::Length(heat_height)],
                rows[2]
            );
            render_report_lines(frame, body[0], report, app.now, app.scroll);
            render_heatmap(frame, body[1], &analytics.heatmap);
        }
        _ => render_report_lines(frame, rows[2], report, app.now, app.scroll),
    }
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let text = app.status.clone().unwrap_or_else(|| {
        format!(
            "Updated {}  |  range: last {}",
            app.now.format("%H:%M:%S"),
            app.dashboard.state().range
        )
    });
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn render_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
    let popup = centered_rect(70, 40, area);
    let message = error.unwrap_or("No data available");
    let paragraph = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::LightRed))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(" Report unavailable "),
        );
    frame.render_widget(paragraph, popup);
}
