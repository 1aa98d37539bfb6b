use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use forgeiq_application::ViewReport;
use forgeiq_ui_presentation::formatting::{LineKind, ReportLine, report_lines};

use crate::util::emphasis_color;

pub(crate) fn render_report_lines(
    frame: &mut Frame,
    area: Rect,
    report: &ViewReport,
    now: DateTime<Utc>,
    scroll: u16,
) {
    let lines: Vec<Line> = report_lines(report, now).iter().map(styled_line).collect();
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn styled_line(line: &ReportLine) -> Line<'static> {
    match line.kind {
        LineKind::Heading => Line::from(Span::styled(
            line.text.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        LineKind::Item => {
            let mut spans = Vec::with_capacity(3);
            if let Some(badge) = line.badge {
                spans.push(Span::styled(
                    badge.bracketed(),
                    Style::default()
                        .fg(emphasis_color(badge.emphasis))
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            spans.push(Span::raw(line.text.clone()));
            Line::from(spans)
        }
        LineKind::Detail => Line::from(Span::styled(
            format!("    {}", line.text),
            Style::default().fg(Color::Gray),
        )),
    }
}
