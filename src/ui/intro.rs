//! Intro screen: the invitation lines fade in, then scroll away

use crate::state::{IntroState, Invitation};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The four intro lines, each on its own row with a blank row between
fn build_intro_text(invitation: &Invitation, visible_lines: usize) -> Vec<Line<'_>> {
    let lines = [
        Line::from(Span::styled(
            invitation.pre_title.as_str(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            invitation.title.to_uppercase(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("of", Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            invitation.honoree.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    lines
        .into_iter()
        .enumerate()
        .flat_map(|(idx, line)| {
            let line = if idx < visible_lines { line } else { Line::from("") };
            [line, Line::from("")]
        })
        .collect()
}

/// Draw the intro screen
pub fn draw(frame: &mut Frame, area: Rect, intro: &IntroState, invitation: &Invitation) {
    let lines = build_intro_text(invitation, intro.visible_lines);
    let text_height = lines.len() as u16;

    // Center position minus scroll offset (text can leave the top of the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(text_height)) as i32 / 2;
    let y_pos = base_y - intro.scroll_offset as i32;

    let lines_off_top = if y_pos < area.y as i32 {
        (area.y as i32 - y_pos) as usize
    } else {
        0
    };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let render_y = y_pos.max(area.y as i32) as u16;
    let text_area = Rect {
        x: area.x,
        y: render_y,
        width: area.width,
        height: (visible.len() as u16).min(area.height.saturating_sub(render_y - area.y)),
    };
    frame.render_widget(
        Paragraph::new(visible).alignment(Alignment::Center),
        text_area,
    );

    if intro.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x,
            y: area.y + area.height - 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}
