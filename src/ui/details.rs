//! Event details cards

use crate::state::EventDetail;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 6;

fn icon(label: &str) -> &'static str {
    match label {
        "Date" => "📅",
        "Time" => "🕙",
        "Venue" => "⛪",
        "Dress Code" => "👔",
        _ => "✦",
    }
}

fn draw_card(frame: &mut Frame, area: Rect, detail: &EventDetail) {
    let lines = vec![
        Line::from(Span::styled(
            detail.value.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            detail.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(
            format!(" {} {} ", icon(&detail.label), detail.label),
            Style::default().fg(Color::Magenta),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Draw the detail cards two per row
pub fn draw(frame: &mut Frame, area: Rect, details: &[EventDetail]) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Event Details",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )))
    .centered();
    frame.render_widget(title, Rect { height: 1, ..area });

    let grid = Rect {
        y: area.y + 2,
        height: area.height.saturating_sub(2),
        ..area
    };
    let row_count = details.len().div_ceil(2);
    let mut row_constraints = vec![Constraint::Length(CARD_HEIGHT); row_count];
    row_constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(grid);

    for (row_idx, pair) in details.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row_idx]);
        for (col, detail) in pair.iter().enumerate() {
            draw_card(frame, cols[col], detail);
        }
    }
}
