//! Layout components (sidebar, status bar) and hit-testing

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, Section};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Button rects for each section, vertically centered in the sidebar
fn sidebar_buttons(sidebar: Rect, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(std::iter::repeat(Constraint::Length(BUTTON_HEIGHT)).take(count));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(sidebar);

    chunks[1..=count].to_vec()
}

/// Section whose sidebar button contains `pos`
pub fn section_at(area: Rect, sections: &[Section], pos: Position) -> Option<Section> {
    let (sidebar, _) = create_layout(area);
    sidebar_buttons(sidebar, sections.len())
        .into_iter()
        .zip(sections.iter())
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, section)| *section)
}

/// Box of the list overlay, centered over the whole screen
pub fn overlay_area(area: Rect) -> Rect {
    let width = (area.width * 3 / 5).clamp(30.min(area.width), 64.min(area.width));
    let height = (area.height * 4 / 5).clamp(8.min(area.height), 24.min(area.height));
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let sections = app.state.sections();
    let buttons = sidebar_buttons(area, sections.len());

    for (section, rect) in sections.iter().zip(buttons) {
        let is_selected = app.state.section == *section;
        render_sidebar_button(frame, rect, section.label(), is_selected, true);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let hints = get_hints(app);
    let status = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Music and share controls on the right
    let controls = Line::from(vec![music_control(app), Span::raw("  "), share_control(app)]);
    let controls_width = controls.width() as u16 + 1;
    let controls_area = Rect {
        x: area.width.saturating_sub(controls_width),
        y: status_area.y,
        width: controls_width.min(area.width),
        height: 1,
    };
    frame.render_widget(
        Paragraph::new(controls).style(Style::default().bg(Color::DarkGray)),
        controls_area,
    );

    // "Play music" hint floats just above the music control
    if app.state.music.show_tooltip() && app.state.music.is_available() {
        let tooltip = " Play music ";
        let tooltip_area = Rect {
            x: controls_area.x,
            y: status_area.y.saturating_sub(1),
            width: (tooltip.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(tooltip).style(Style::default().bg(Color::Magenta).fg(Color::White)),
            tooltip_area,
        );
    }
}

fn music_control(app: &App) -> Span<'static> {
    let music = &app.state.music;
    if !music.is_available() {
        Span::styled("♪ m", Style::default().fg(Color::Black))
    } else if music.is_playing() {
        Span::styled(
            "♫ m:pause",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("♪ m:play", Style::default().fg(Color::White))
    }
}

fn share_control(app: &App) -> Span<'static> {
    let style = if app.state.share.menu_open {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    Span::styled("⇪ s:share", style)
}

/// Keyboard hints for the current focus and section
fn get_hints(app: &App) -> String {
    if app.state.visible_overlay().is_some() {
        return "type:search  ↑/↓:scroll  Esc:close".to_string();
    }
    if app.state.focus == Focus::Form {
        return format!("Tab:next  Space:toggle  Enter/{SUBMIT_SHORTCUT}:send  Esc:back");
    }
    if app.state.share.menu_open {
        return format!("c/{COPY_SHORTCUT}:copy link  s:close");
    }
    let section_hints = match app.state.section {
        Section::Welcome => "←/→:photos",
        Section::Details => "",
        Section::Godparents => "←/→:list  Enter:see all",
        Section::Rsvp => "Enter:respond",
    };
    let rsvp_hint = if app.state.rsvp_enabled { "  r:rsvp" } else { "" };
    format!("Tab:section  {section_hints}  f/g:godparents{rsvp_hint}  q:quit")
}
