//! Searchable godparent list overlay

use crate::state::{ListOverlay, OverlayView};
use crate::ui::layout::overlay_area;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Search name...";

/// Result rows for the visible window of the list
fn result_lines(overlay: &ListOverlay, rows: usize) -> Vec<Line<'_>> {
    match overlay.view() {
        OverlayView::NoResults => vec![Line::from(Span::styled(
            "No results",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))],
        OverlayView::Results(entries) => entries
            .into_iter()
            .skip(overlay.scroll_offset)
            .take(rows)
            .map(|entry| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::Magenta)),
                    Span::styled(entry.name.as_str(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  {}", entry.role),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect(),
    }
}

/// Size of the whole list, independent of the query
fn total_label(overlay: &ListOverlay) -> String {
    format!(" {} total ", overlay.entries().len())
}

/// Query text, or the placeholder while it is empty
fn input_line(query: &str) -> Line<'_> {
    if query.is_empty() {
        Line::from(vec![
            Span::styled("▌", Style::default().fg(Color::Cyan)),
            Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::raw(query),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    }
}

/// Draw the overlay over the whole screen
pub fn render_list_overlay(frame: &mut Frame, overlay: &ListOverlay) {
    let area = overlay_area(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", overlay.title()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .title_top(
            Line::from(Span::styled(
                total_label(overlay),
                Style::default().fg(Color::DarkGray),
            ))
            .right_aligned(),
        )
        .title_bottom(Line::from(" Esc to close ").right_aligned())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Results
        ])
        .split(inner);

    let search = Paragraph::new(input_line(overlay.query())).block(
        Block::default()
            .title(format!(" Search {} ", overlay.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(search, chunks[0]);

    let results_area = Rect {
        x: chunks[1].x + 1,
        width: chunks[1].width.saturating_sub(2),
        ..chunks[1]
    };
    let lines = result_lines(overlay, results_area.height as usize);
    frame.render_widget(Paragraph::new(lines), results_area);
}
