//! Welcome section: hero, photo gallery and footer

use crate::app::App;
use crate::state::{GalleryState, Invitation, SlideDirection};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Dots under the photo, the current one filled
fn slide_indicator(gallery: &GalleryState) -> Line<'static> {
    let arrow = match gallery.direction {
        SlideDirection::Forward => "→",
        SlideDirection::Backward => "←",
    };
    let mut spans = vec![Span::styled("‹ ", Style::default().fg(Color::DarkGray))];
    for idx in 0..gallery.len() {
        let (dot, style) = if idx == gallery.index() {
            ("●", Style::default().fg(Color::Magenta))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(format!("{dot} "), style));
    }
    spans.push(Span::styled("›", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("  {arrow}"),
        Style::default().fg(Color::DarkGray),
    ));
    Line::from(spans)
}

fn hero_lines(invitation: &Invitation) -> Vec<Line<'_>> {
    vec![
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
        Line::from(Span::styled(
            invitation.honoree.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let invitation = &app.state.invitation;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Hero
            Constraint::Min(5),    // Gallery
            Constraint::Length(4), // Footer
        ])
        .split(area);

    let hero = Paragraph::new(hero_lines(invitation)).alignment(Alignment::Center);
    frame.render_widget(hero, chunks[0].inner(Margin::new(0, 1)));

    draw_gallery(frame, chunks[1], &app.state.gallery, invitation);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            invitation.signoff.as_str(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(
            invitation.family_line(),
            Style::default().fg(Color::Magenta),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(footer, chunks[2]);
}

fn draw_gallery(frame: &mut Frame, area: Rect, gallery: &GalleryState, invitation: &Invitation) {
    let caption = invitation
        .photos
        .get(gallery.index())
        .map(|photo| photo.caption.as_str())
        .unwrap_or_default();

    let block = Block::default()
        .title(format!(" Gallery {}/{} ", gallery.index() + 1, gallery.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Caption vertically centered, indicator on the last row
    let caption_y = inner.y + inner.height.saturating_sub(2) / 2;
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("✿  ", Style::default().fg(Color::Magenta)),
            Span::styled(caption, Style::default().fg(Color::White)),
            Span::styled("  ✿", Style::default().fg(Color::Magenta)),
        ]))
        .alignment(Alignment::Center),
        Rect {
            y: caption_y,
            height: 1.min(inner.height),
            ..inner
        },
    );

    if inner.height > 1 {
        frame.render_widget(
            Paragraph::new(slide_indicator(gallery)).alignment(Alignment::Center),
            Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            },
        );
    }
}
