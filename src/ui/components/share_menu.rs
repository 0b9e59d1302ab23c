//! Copy-link dropdown shown when no share command is configured

use crate::platform::COPY_SHORTCUT;
use crate::state::ShareState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 28;
const MENU_HEIGHT: u16 = 4;

/// Draw the dropdown anchored above the right end of the status bar
pub fn render_share_menu(frame: &mut Frame, share: &ShareState, url: &str) {
    if !share.menu_open {
        return;
    }

    let area = frame.area();
    let width = MENU_WIDTH.min(area.width);
    let height = MENU_HEIGHT.min(area.height.saturating_sub(1));
    let menu_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let (icon, label_style) = if share.is_copied() {
        ("✓", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        ("⧉", Style::default().fg(Color::White))
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), label_style),
            Span::styled(share.copy_label(), label_style),
            Span::styled(
                format!("  c/{COPY_SHORTCUT}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            url.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, menu_area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        ),
        menu_area,
    );
}
