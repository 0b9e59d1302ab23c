//! Application state definitions

use super::gallery::GalleryState;
use super::intro_state::IntroState;
use super::invitation::Invitation;
use super::key_listener::{KeyListeners, OverlayKind};
use super::music::MusicState;
use super::notice::Notices;
use super::overlay::ListOverlay;
use super::share::ShareState;

/// Top-level screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Intro animation
    Intro,
    #[default]
    Page,
}

/// Section of the invitation page shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Welcome,
    Details,
    Godparents,
    Rsvp,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Welcome,
        Section::Details,
        Section::Godparents,
        Section::Rsvp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Welcome => "Welcome",
            Section::Details => "Details",
            Section::Godparents => "Godparents",
            Section::Rsvp => "RSVP",
        }
    }

    /// Sections that are shown, in order
    pub fn visible(rsvp_enabled: bool) -> Vec<Section> {
        Self::ALL
            .into_iter()
            .filter(|s| rsvp_enabled || *s != Section::Rsvp)
            .collect()
    }
}

/// Where keyboard input goes when no overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Navigation keys and shortcuts
    #[default]
    Page,
    /// Typing into the RSVP form
    Form,
}

/// Main application state
pub struct AppState {
    pub invitation: Invitation,
    pub current_view: View,
    pub section: Section,
    pub focus: Focus,
    pub rsvp_enabled: bool,

    pub godfathers: ListOverlay,
    pub godmothers: ListOverlay,
    pub key_listeners: KeyListeners,
    /// Godparent list highlighted in the Godparents section
    pub selected_list: OverlayKind,

    pub intro: Option<IntroState>,
    pub gallery: GalleryState,
    pub music: MusicState,
    pub share: ShareState,
    pub notices: Notices,
}

impl AppState {
    pub fn new(
        invitation: Invitation,
        rsvp_enabled: bool,
        gallery: GalleryState,
        music: MusicState,
    ) -> Self {
        let godfathers = ListOverlay::new(
            OverlayKind::Godfathers,
            "Godfathers",
            invitation.godfathers.clone(),
        );
        let godmothers = ListOverlay::new(
            OverlayKind::Godmothers,
            "Godmothers",
            invitation.godmothers.clone(),
        );
        Self {
            invitation,
            current_view: View::Page,
            section: Section::Welcome,
            focus: Focus::Page,
            rsvp_enabled,
            godfathers,
            godmothers,
            key_listeners: KeyListeners::new(),
            selected_list: OverlayKind::Godfathers,
            intro: None,
            gallery,
            music,
            share: ShareState::default(),
            notices: Notices::default(),
        }
    }

    pub fn overlay(&self, kind: OverlayKind) -> &ListOverlay {
        match kind {
            OverlayKind::Godfathers => &self.godfathers,
            OverlayKind::Godmothers => &self.godmothers,
        }
    }

    pub fn overlay_mut(&mut self, kind: OverlayKind) -> &mut ListOverlay {
        match kind {
            OverlayKind::Godfathers => &mut self.godfathers,
            OverlayKind::Godmothers => &mut self.godmothers,
        }
    }

    /// The overlay currently on screen, if any
    pub fn visible_overlay(&self) -> Option<&ListOverlay> {
        [&self.godfathers, &self.godmothers]
            .into_iter()
            .find(|o| o.is_visible())
    }

    /// Open one overlay; the other is closed so at most one is visible
    pub fn open_overlay(&mut self, kind: OverlayKind) {
        let listeners = self.key_listeners.clone();
        for other in [OverlayKind::Godfathers, OverlayKind::Godmothers] {
            if other != kind {
                self.overlay_mut(other).close();
            }
        }
        self.overlay_mut(kind).open(&listeners);
    }

    /// Switch the highlighted godparent list
    pub fn toggle_selected_list(&mut self) {
        self.selected_list = match self.selected_list {
            OverlayKind::Godfathers => OverlayKind::Godmothers,
            OverlayKind::Godmothers => OverlayKind::Godfathers,
        };
    }

    pub fn sections(&self) -> Vec<Section> {
        Section::visible(self.rsvp_enabled)
    }

    pub fn next_section(&mut self) {
        let sections = self.sections();
        let idx = sections.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = sections[(idx + 1) % sections.len()];
    }

    pub fn prev_section(&mut self) {
        let sections = self.sections();
        let idx = sections.iter().position(|s| *s == self.section).unwrap_or(0);
        self.section = sections[(idx + sections.len() - 1) % sections.len()];
    }
}
