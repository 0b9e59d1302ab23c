//! Share dropdown state

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct ShareState {
    pub menu_open: bool,
    copied_until: Option<Instant>,
}

impl ShareState {
    /// How long "Copied!" is shown before the dropdown closes
    pub const COPIED_DURATION: Duration = Duration::from_secs(2);

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_until = Some(now + Self::COPIED_DURATION);
    }

    /// Reset the copied label and close the dropdown once the feedback period ends
    pub fn tick(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
            self.menu_open = false;
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.is_copied() {
            "Copied!"
        } else {
            "Copy link"
        }
    }
}
