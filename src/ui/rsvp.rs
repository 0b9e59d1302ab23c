//! RSVP section: the form, and the thank-you panel once submitted

use super::components::{render_button, render_dialog, ButtonState, DialogConfig, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::rsvp::{confirmation_message, SubmissionStatus};
use crate::state::{Focus, Form, FormField, RsvpForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const FORM_WIDTH: u16 = 56;

/// Draw a text field: value or placeholder, with a cursor while active
fn draw_text_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let accent = if is_active { Color::Cyan } else { Color::DarkGray };

    let value = field.as_text();
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            field.placeholder.as_str(),
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::styled(value, Style::default().fg(Color::White))]
    };
    if is_active {
        // Cursor sits before the placeholder, after typed text
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the attendance toggle with the current choice
fn draw_attendance(frame: &mut Frame, area: Rect, form: &RsvpForm, is_active: bool) {
    let accent = if is_active { Color::Cyan } else { Color::DarkGray };
    let (mark, color) = if form.is_attending() {
        ("◉", Color::Magenta)
    } else {
        ("○", Color::Gray)
    };

    let mut spans = vec![Span::styled(
        format!("{mark} {}", form.attendance_label()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if is_active {
        spans.push(Span::styled(
            "  (Space to change)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let block = Block::default()
        .title(format!(" {} ", form.attending.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Submit button label and state for the current submission status
fn submit_button(status: SubmissionStatus, is_active: bool) -> (&'static str, ButtonState) {
    match status {
        SubmissionStatus::Pending | SubmissionStatus::Validating => {
            ("Sending...", ButtonState::Disabled)
        }
        _ => ("Send RSVP", ButtonState::from_flags(is_active, true)),
    }
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.rsvp.form;
    let focused = app.state.focus == Focus::Form;
    let active = |row: usize| focused && form.active_field() == row;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // Heading
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Attendance
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Hint
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Kindly respond",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )))
        .centered(),
        chunks[0],
    );

    for (row, field_area) in [(0, chunks[1]), (1, chunks[2])] {
        if let Some(field) = form.get_field(row) {
            draw_text_field(frame, field_area, field, active(row));
        }
    }
    draw_attendance(frame, chunks[3], form, active(2));

    let (label, state) = submit_button(app.rsvp.status(), focused && form.is_submit_row_active());
    render_button(frame, chunks[4], label, state, Color::Magenta);

    let hint = if focused {
        format!("Tab: next field · Enter/{SUBMIT_SHORTCUT}: send · Esc: done")
    } else {
        "Press r to fill in your response".to_string()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))).centered(),
        chunks[5],
    );
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let width = FORM_WIDTH.min(area.width);
    let form_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    match app.rsvp.receipt() {
        Some(receipt) if app.rsvp.status() == SubmissionStatus::Submitted => render_dialog(
            frame,
            form_area,
            DialogConfig {
                title: "Thank You!",
                title_color: Color::Magenta,
                border_color: Color::Magenta,
                message: confirmation_message(receipt.attending),
                hint: None,
                max_width: width,
            },
        ),
        _ => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray));
            let inner = block.inner(form_area);
            frame.render_widget(block, form_area);
            draw_form(frame, inner, app);
        }
    }
}
