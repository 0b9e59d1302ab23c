//! Godparents section: a short preview of each list with a "See all" control

use super::components::{render_button, ButtonState, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{Entry, ListOverlay, OverlayKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Entries shown before "See all"
const PREVIEW_COUNT: usize = 6;

fn preview(entries: &[Entry]) -> &[Entry] {
    &entries[..entries.len().min(PREVIEW_COUNT)]
}

fn see_all_label(entries: &[Entry]) -> String {
    format!("See all ({})", entries.len())
}

fn draw_list_card(frame: &mut Frame, area: Rect, overlay: &ListOverlay, is_selected: bool) {
    let border_color = if is_selected {
        Color::Magenta
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", overlay.title()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(inner);

    let lines: Vec<Line> = preview(overlay.entries())
        .iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(" • ", Style::default().fg(Color::Magenta)),
                Span::raw(entry.name.as_str()),
                Span::styled(
                    format!("  {}", entry.role),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let state = if is_selected {
        ButtonState::Selected
    } else {
        ButtonState::Normal
    };
    render_button(
        frame,
        chunks[1],
        &see_all_label(overlay.entries()),
        state,
        Color::Magenta,
    );
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let card_height = (PREVIEW_COUNT as u16 + BUTTON_HEIGHT + 2).min(area.height);
    for (col, kind) in [OverlayKind::Godfathers, OverlayKind::Godmothers]
        .into_iter()
        .enumerate()
    {
        let card = Rect {
            height: card_height,
            ..cols[col]
        };
        draw_list_card(
            frame,
            card,
            app.state.overlay(kind),
            app.state.selected_list == kind,
        );
    }
}
