use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use forgeiq_ui_presentation::formatting::StatCard;

use crate::util::emphasis_color;

pub(crate) const CARD_HEIGHT: u16 = 5;

pub(crate) fn render_cards(frame: &mut Frame, area: Rect, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);
    for (card, column) in cards.iter().zip(columns.iter()) {
        render_stat_card(frame, *column, card);
    }
}

fn render_stat_card(frame: &mut Frame, area: Rect, card: &StatCard) {
    let color = emphasis_color(card.emphasis);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(card.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = crate::ui_layout_split!(
        Direction::Vertical,
        [Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)],
        inner
    );
    let value = Paragraph::new(card.value.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(value, rows[1]);

    if let Some(note) = &card.note {
        let note = Paragraph::new(Line::from(note.as_str()))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(note, rows[2]);
    }
}
