//! UI module for rendering the TUI

mod components;
mod details;
mod godparents;
mod intro;
pub mod layout;
mod rsvp;
mod welcome;

use crate::app::App;
use crate::state::{Section, View};
use components::{render_list_overlay, render_notices, render_share_menu};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if let (View::Intro, Some(intro)) = (&app.state.current_view, &app.state.intro) {
        intro::draw(frame, area, intro, &app.state.invitation);
        return;
    }

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app);

    // Draw the selected section
    match app.state.section {
        Section::Welcome => welcome::draw(frame, main_area, app),
        Section::Details => details::draw(frame, main_area, &app.state.invitation.details),
        Section::Godparents => godparents::draw(frame, main_area, app),
        Section::Rsvp => rsvp::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
    render_share_menu(frame, &app.state.share, &app.state.invitation.share.url);

    if let Some(overlay) = app.state.visible_overlay() {
        render_list_overlay(frame, overlay);
    }

    // Notices float above everything
    if !app.state.notices.is_empty() {
        render_notices(frame, &app.state.notices);
    }
}
