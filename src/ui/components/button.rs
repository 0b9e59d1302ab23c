//! Boxed button component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Selected,
    /// Greyed out and not actionable
    Disabled,
}

impl ButtonState {
    pub fn from_flags(is_selected: bool, is_enabled: bool) -> Self {
        match (is_enabled, is_selected) {
            (false, _) => ButtonState::Disabled,
            (true, true) => ButtonState::Selected,
            (true, false) => ButtonState::Normal,
        }
    }

    fn styles(self, accent: Color) -> (Style, Style) {
        match self {
            ButtonState::Selected => (
                Style::default().fg(accent),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            ButtonState::Normal => (Style::default().fg(Color::Gray), Style::default()),
            ButtonState::Disabled => (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            ),
        }
    }
}

/// Render a bordered button with centered content
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    state: ButtonState,
    accent: Color,
) {
    let (border_style, text_style) = state.styles(accent);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let paragraph = Paragraph::new(content.to_string())
        .style(text_style)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Render a sidebar section button
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    render_button(
        frame,
        area,
        label,
        ButtonState::from_flags(is_selected, is_enabled),
        Color::Magenta,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_wins_over_selected() {
        assert_eq!(ButtonState::from_flags(true, false), ButtonState::Disabled);
        assert_eq!(ButtonState::from_flags(true, true), ButtonState::Selected);
        assert_eq!(ButtonState::from_flags(false, true), ButtonState::Normal);
    }
}
