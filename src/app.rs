//! Application state and core logic

use crate::audio::{AudioPlayer, ProcessPlayer};
use crate::config::InviteConfig;
use crate::platform::COPY_MODIFIER;
use crate::rsvp::{
    confirmation_message, FlowEvent, RsvpFlow, RsvpSubmitter, SimulatedSubmitter, SubmitOutcome,
};
use crate::share::{SharePlatform, SystemShare};
use crate::state::{
    AppState, Focus, Form, GalleryState, IntroState, Invitation, MusicState, NoticeVariant,
    OverlayKind, Section, View,
};
use crate::ui::layout;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::Instant;

/// Rows moved by PageUp/PageDown in the overlay list
const PAGE_ROWS: usize = 10;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// RSVP form and its submission flow
    pub rsvp: RsvpFlow,
    share_platform: Box<dyn SharePlatform>,
    audio: Box<dyn AudioPlayer>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create the app with real platform services
    pub fn new(config: &InviteConfig, invitation: Invitation) -> Self {
        let submitter = Arc::new(SimulatedSubmitter::new(config.submit_delay()));
        let share = Box::new(SystemShare::new(config.share_command.clone()));
        let audio = Box::new(ProcessPlayer::new(
            config.music_player(),
            config.music_path.clone(),
        ));
        let mut app = Self::with_services(config, invitation, submitter, share, audio);
        if config.show_intro() {
            app.state.intro = Some(IntroState::new());
            app.state.current_view = View::Intro;
        }
        app
    }

    /// Create the app with injected services
    pub fn with_services(
        config: &InviteConfig,
        invitation: Invitation,
        submitter: Arc<dyn RsvpSubmitter>,
        share_platform: Box<dyn SharePlatform>,
        audio: Box<dyn AudioPlayer>,
    ) -> Self {
        let gallery = GalleryState::new(invitation.photos.len(), config.gallery_interval());
        let music = MusicState::new(audio.is_available(), Instant::now());
        let state = AppState::new(invitation, config.rsvp_enabled(), gallery, music);
        tracing::debug!(
            music_available = state.music.is_available(),
            can_share = share_platform.can_share(),
            "app initialized"
        );

        Self {
            state,
            rsvp: RsvpFlow::new(submitter, config.submit_timeout()),
            share_platform,
            audio,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if in the intro animation
    pub fn in_intro(&self) -> bool {
        matches!(self.state.current_view, View::Intro)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn terminal_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }

    /// Advance timers and pick up finished work
    pub fn tick(&mut self, now: Instant) {
        if let Some(ref mut intro) = self.state.intro {
            let height = self.terminal_size.map(|(h, _)| h).unwrap_or(24);
            intro.update_at(now, height);
            if intro.is_complete() {
                self.finish_intro();
            }
        } else {
            self.state.gallery.tick(now);
        }

        if let Some(event) = self.rsvp.poll() {
            self.apply_flow_event(event);
        }

        self.state.music.tick(now);
        self.state.share.tick(now);
        self.state.notices.prune(now);
    }

    fn finish_intro(&mut self) {
        self.state.intro = None;
        self.state.current_view = View::Page;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.in_intro() {
            if let Some(ref mut intro) = self.state.intro {
                intro.skip();
            }
            self.finish_intro();
            return;
        }

        // Active overlays listen for the cancel key before anything else
        if key.code == KeyCode::Esc && self.dispatch_cancel() {
            return;
        }

        if let Some(kind) = self.state.visible_overlay().map(|o| o.kind()) {
            self.handle_overlay_key(kind, key);
            return;
        }

        if key.code == KeyCode::Char('l') && key.modifiers.contains(COPY_MODIFIER) {
            self.copy_link();
            return;
        }

        match self.state.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Form => self.handle_form_key(key),
        }
    }

    /// Deliver the cancel key to every registered listener. Returns false if none were active.
    fn dispatch_cancel(&mut self) -> bool {
        let targets = self.state.key_listeners.active();
        if targets.is_empty() {
            return false;
        }
        for target in targets {
            self.state.overlay_mut(target).close();
        }
        tracing::debug!(remaining = self.state.key_listeners.count(), "cancel key handled");
        true
    }

    fn handle_overlay_key(&mut self, kind: OverlayKind, key: KeyEvent) {
        let overlay = self.state.overlay_mut(kind);
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                overlay.set_query(String::new());
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                overlay.push_char(c);
            }
            KeyCode::Backspace => overlay.pop_char(),
            KeyCode::Down => overlay.scroll_down(1),
            KeyCode::Up => overlay.scroll_up(1),
            KeyCode::PageDown => overlay.scroll_down(PAGE_ROWS),
            KeyCode::PageUp => overlay.scroll_up(PAGE_ROWS),
            _ => {}
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => self.state.next_section(),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => self.state.prev_section(),
            KeyCode::Left if self.state.section == Section::Welcome => self.state.gallery.prev(),
            KeyCode::Right if self.state.section == Section::Welcome => self.state.gallery.next(),
            KeyCode::Char(c @ '1'..='9') if self.state.section == Section::Welcome => {
                if let Some(digit) = c.to_digit(10) {
                    self.state.gallery.go_to(digit as usize - 1);
                }
            }
            KeyCode::Left | KeyCode::Right if self.state.section == Section::Godparents => {
                self.state.toggle_selected_list()
            }
            KeyCode::Enter if self.state.section == Section::Godparents => {
                self.state.open_overlay(self.state.selected_list)
            }
            KeyCode::Char('f') => self.state.open_overlay(OverlayKind::Godfathers),
            KeyCode::Char('g') => self.state.open_overlay(OverlayKind::Godmothers),
            KeyCode::Char('m') => self.toggle_music(),
            KeyCode::Char('s') => self.share(),
            KeyCode::Char('c') if self.state.share.menu_open => self.copy_link(),
            KeyCode::Char('r') | KeyCode::Enter if self.state.rsvp_enabled => {
                self.state.section = Section::Rsvp;
                if self.rsvp.is_editable() {
                    self.state.focus = Focus::Form;
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.focus = Focus::Page,
            KeyCode::Tab | KeyCode::Down => self.rsvp.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.rsvp.form.prev_field(),
            KeyCode::Enter => self.submit_rsvp(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_rsvp()
            }
            KeyCode::Backspace if self.rsvp.is_editable() => {
                if let Some(field) = self.rsvp.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c)
                if self.rsvp.is_editable()
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(field) = self.rsvp.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Validate and send the RSVP
    pub fn submit_rsvp(&mut self) {
        match self.rsvp.submit() {
            SubmitOutcome::Started => {}
            SubmitOutcome::Rejected(_) => self.state.notices.push(
                "Please fill in all fields",
                "Name and email are required.",
                NoticeVariant::Destructive,
            ),
            SubmitOutcome::Ignored => {}
        }
    }

    /// Surface the outcome of a finished submission
    pub fn apply_flow_event(&mut self, event: FlowEvent) {
        match event {
            FlowEvent::Submitted(receipt) => {
                tracing::info!(
                    id = %receipt.id,
                    received_at = %receipt.received_at,
                    attending = receipt.attending,
                    "RSVP confirmed"
                );
                self.state.focus = Focus::Page;
                self.state.notices.push(
                    "RSVP Received!",
                    confirmation_message(receipt.attending),
                    NoticeVariant::Default,
                );
            }
            FlowEvent::Failed(err) => {
                let description = if err.is_retryable() {
                    format!("{err}. Please try again.")
                } else {
                    err.to_string()
                };
                self.state.notices.push(
                    "Could not send RSVP",
                    &description,
                    NoticeVariant::Destructive,
                );
            }
        }
    }

    pub fn toggle_music(&mut self) {
        self.state.music.toggle(self.audio.as_mut());
    }

    /// Use the platform share capability, or fall back to the copy-link dropdown
    pub fn share(&mut self) {
        if self.share_platform.can_share() {
            if let Err(err) = self.share_platform.share(&self.state.invitation.share) {
                tracing::debug!(%err, "share cancelled or failed");
            }
        } else {
            self.state.share.toggle_menu();
        }
    }

    pub fn copy_link(&mut self) {
        let url = self.state.invitation.share.url.clone();
        match self.share_platform.copy_text(&url) {
            Ok(()) => {
                self.state.share.mark_copied(Instant::now());
                self.state.notices.push(
                    "Link Copied!",
                    "The invitation link has been copied to your clipboard.",
                    NoticeVariant::Default,
                );
            }
            Err(err) => {
                tracing::warn!(%err, "copy to clipboard failed");
                self.state.notices.push(
                    "Failed to copy",
                    "Please copy the link manually.",
                    NoticeVariant::Destructive,
                );
            }
        }
    }

    /// Handle mouse events
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.in_intro() {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                self.finish_intro();
            }
            return;
        }

        let area = self.terminal_area();
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.visible_overlay().is_some() {
                    // Backdrop click closes; clicks inside the box are absorbed
                    if !layout::overlay_area(area).contains(pos) {
                        self.dispatch_cancel();
                    }
                    return;
                }
                let sections = self.state.sections();
                if let Some(section) = layout::section_at(area, &sections, pos) {
                    self.state.section = section;
                    self.state.focus = Focus::Page;
                }
            }
            MouseEventKind::ScrollDown => {
                if let Some(kind) = self.state.visible_overlay().map(|o| o.kind()) {
                    self.state.overlay_mut(kind).scroll_down(1);
                }
            }
            MouseEventKind::ScrollUp => {
                if let Some(kind) = self.state.visible_overlay().map(|o| o.kind()) {
                    self.state.overlay_mut(kind).scroll_up(1);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::MockAudioPlayer;
    use crate::error::PlatformError;
    use crate::rsvp::{MockRsvpSubmitter, SubmissionStatus};
    use crate::share::MockSharePlatform;
    use crate::state::{Receipt, SUBMIT_ROW};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn quiet_share() -> MockSharePlatform {
        let mut share = MockSharePlatform::new();
        share.expect_can_share().return_const(false);
        share
    }

    fn silent_audio() -> MockAudioPlayer {
        let mut audio = MockAudioPlayer::new();
        audio.expect_is_available().return_const(false);
        audio
    }

    fn immediate_submitter() -> MockRsvpSubmitter {
        let mut submitter = MockRsvpSubmitter::new();
        submitter
            .expect_submit()
            .returning(|req| Ok(Receipt::new(req.attending)));
        submitter
    }

    fn build(
        submitter: MockRsvpSubmitter,
        share: MockSharePlatform,
        audio: MockAudioPlayer,
    ) -> App {
        App::with_services(
            &InviteConfig::default(),
            Invitation::default(),
            Arc::new(submitter),
            Box::new(share),
            Box::new(audio),
        )
    }

    fn test_app() -> App {
        build(immediate_submitter(), quiet_share(), silent_audio())
    }

    mod overlay_keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_shortcut_opens_overlay_with_one_listener() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('f')));
            assert!(app.state.godfathers.is_visible());
            assert_eq!(app.state.key_listeners.count(), 1);
        }

        #[test]
        fn test_escape_closes_regardless_of_query() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('g')));
            type_text(&mut app, "  no such person ");
            app.handle_key(key(KeyCode::Esc));
            assert!(!app.state.godmothers.is_visible());
            assert_eq!(app.state.key_listeners.count(), 0);
        }

        #[test]
        fn test_typing_goes_to_query_not_shortcuts() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('f')));
            type_text(&mut app, "qms");
            assert!(!app.should_quit());
            assert!(!app.state.share.menu_open);
            assert_eq!(app.state.godfathers.query(), "qms");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.godfathers.query(), "qm");
        }

        #[test]
        fn test_repeated_open_close_keeps_at_most_one_listener() {
            let mut app = test_app();
            for i in 0..20 {
                let shortcut = if i % 2 == 0 { 'f' } else { 'g' };
                app.handle_key(key(KeyCode::Char(shortcut)));
                assert_eq!(app.state.key_listeners.count(), 1);
                app.handle_key(key(KeyCode::Esc));
                assert_eq!(app.state.key_listeners.count(), 0);
            }
        }

        #[test]
        fn test_escape_without_overlay_leaves_page_alone() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Esc));
            assert!(!app.should_quit());
            assert_eq!(app.state.focus, Focus::Page);
        }

        #[test]
        fn test_backdrop_click_closes_overlay() {
            let mut app = test_app();
            app.terminal_size = Some((40, 120));
            app.handle_key(key(KeyCode::Char('f')));

            let inside = layout::overlay_area(app.terminal_area());
            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: inside.x + 1,
                row: inside.y + 1,
                modifiers: KeyModifiers::NONE,
            });
            assert!(app.state.godfathers.is_visible());

            app.handle_mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            });
            assert!(!app.state.godfathers.is_visible());
            assert_eq!(app.state.key_listeners.count(), 0);
        }
    }

    mod rsvp {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_empty_name_shows_validation_notice() {
            let mut submitter = MockRsvpSubmitter::new();
            submitter.expect_submit().never();
            let mut app = build(submitter, quiet_share(), silent_audio());

            app.handle_key(key(KeyCode::Char('r')));
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "x@y.com");
            app.handle_key(key(KeyCode::Enter));

            assert_eq!(app.rsvp.status(), SubmissionStatus::Idle);
            let notice = app.state.notices.latest().unwrap();
            assert_eq!(notice.title, "Please fill in all fields");
            assert_eq!(notice.variant, NoticeVariant::Destructive);
        }

        #[tokio::test]
        async fn test_full_flow_with_regretful_confirmation() {
            let mut submitter = MockRsvpSubmitter::new();
            submitter
                .expect_submit()
                .times(1)
                .returning(|req| Ok(Receipt::new(req.attending)));
            let mut app = build(submitter, quiet_share(), silent_audio());

            app.handle_key(key(KeyCode::Char('r')));
            assert_eq!(app.state.focus, Focus::Form);
            type_text(&mut app, "A");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, "a@b.com");
            app.handle_key(key(KeyCode::Tab));
            type_text(&mut app, " ");
            assert!(!app.rsvp.form.is_attending());

            app.handle_key(key(KeyCode::Enter));
            assert_eq!(app.rsvp.status(), SubmissionStatus::Pending);

            // Re-entrant submit is ignored
            app.handle_key(key(KeyCode::Enter));

            let event = app.rsvp.settle().await.unwrap();
            app.apply_flow_event(event);

            assert_eq!(app.rsvp.status(), SubmissionStatus::Submitted);
            assert_eq!(app.state.focus, Focus::Page);
            let notice = app.state.notices.latest().unwrap();
            assert_eq!(notice.title, "RSVP Received!");
            assert_eq!(
                notice.description,
                "We'll miss you, but thank you for letting us know."
            );
        }

        #[tokio::test]
        async fn test_tick_delivers_completion() {
            let mut app = test_app();
            app.rsvp.form.name.set_text("A");
            app.rsvp.form.email.set_text("a@b.com");
            app.submit_rsvp();

            for _ in 0..100 {
                tokio::task::yield_now().await;
                app.tick(Instant::now());
                if app.rsvp.status() == SubmissionStatus::Submitted {
                    break;
                }
            }

            assert_eq!(app.rsvp.status(), SubmissionStatus::Submitted);
            assert_eq!(
                app.state.notices.latest().map(|n| n.description.as_str()),
                Some("We're excited to celebrate with you!")
            );
        }

        #[tokio::test(start_paused = true)]
        async fn test_slow_simulated_delay_still_confirms() {
            let config = InviteConfig {
                submit_delay_ms: Some(15_000),
                show_intro: Some(false),
                ..Default::default()
            };
            let mut app = App::new(&config, Invitation::default());
            app.rsvp.form.name.set_text("A");
            app.rsvp.form.email.set_text("a@b.com");
            app.submit_rsvp();

            let event = app.rsvp.settle().await.unwrap();
            app.apply_flow_event(event);

            assert_eq!(app.rsvp.status(), SubmissionStatus::Submitted);
        }

        #[tokio::test]
        async fn test_edits_blocked_after_submission() {
            let mut app = test_app();
            app.rsvp.form.name.set_text("A");
            app.rsvp.form.email.set_text("a@b.com");
            app.submit_rsvp();
            let event = app.rsvp.settle().await.unwrap();
            app.apply_flow_event(event);

            app.handle_key(key(KeyCode::Char('r')));
            assert_eq!(app.state.focus, Focus::Page);
            assert_eq!(app.state.section, Section::Rsvp);
            assert_eq!(app.rsvp.form.name.as_text(), "A");
        }

        #[tokio::test]
        async fn test_transport_failure_notice() {
            let mut submitter = MockRsvpSubmitter::new();
            submitter
                .expect_submit()
                .returning(|_| Err(crate::error::RsvpError::transport("offline", true)));
            let mut app = build(submitter, quiet_share(), silent_audio());
            app.rsvp.form.name.set_text("A");
            app.rsvp.form.email.set_text("a@b.com");
            app.submit_rsvp();
            let event = app.rsvp.settle().await.unwrap();
            app.apply_flow_event(event);

            assert_eq!(app.rsvp.status(), SubmissionStatus::Idle);
            let notice = app.state.notices.latest().unwrap();
            assert_eq!(notice.title, "Could not send RSVP");
            assert_eq!(
                notice.description,
                "Submission failed: offline. Please try again."
            );
        }

        #[test]
        fn test_modified_chars_are_not_typed() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('r')));
            type_text(&mut app, "Ann");
            app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
            app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
            assert_eq!(app.rsvp.form.name.as_text(), "AnnA");
        }

        #[test]
        fn test_form_navigation_keys() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('r')));
            app.handle_key(key(KeyCode::BackTab));
            assert_eq!(app.rsvp.form.active_field(), SUBMIT_ROW);
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.focus, Focus::Page);
        }

        #[test]
        fn test_rsvp_shortcut_ignored_when_disabled() {
            let config = InviteConfig {
                rsvp_enabled: Some(false),
                ..Default::default()
            };
            let mut app = App::with_services(
                &config,
                Invitation::default(),
                Arc::new(immediate_submitter()),
                Box::new(quiet_share()),
                Box::new(silent_audio()),
            );
            app.handle_key(key(KeyCode::Char('r')));
            assert_eq!(app.state.focus, Focus::Page);
            assert_eq!(app.state.section, Section::Welcome);
        }
    }

    mod share {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_without_share_capability_toggles_menu() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('s')));
            assert!(app.state.share.menu_open);
            app.handle_key(key(KeyCode::Char('s')));
            assert!(!app.state.share.menu_open);
        }

        #[test]
        fn test_native_share_failure_is_swallowed() {
            let mut share = MockSharePlatform::new();
            share.expect_can_share().return_const(true);
            share
                .expect_share()
                .times(1)
                .returning(|_| Err(PlatformError::ShareFailed("cancelled".to_string())));
            let mut app = build(immediate_submitter(), share, silent_audio());

            app.handle_key(key(KeyCode::Char('s')));

            assert!(!app.state.share.menu_open);
            assert!(app.state.notices.is_empty());
        }

        #[test]
        fn test_copy_link_success() {
            let mut share = quiet_share();
            share
                .expect_copy_text()
                .withf(|text: &str| text == "https://matteo-adam-christening.example.com")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = build(immediate_submitter(), share, silent_audio());

            app.handle_key(key(KeyCode::Char('s')));
            app.handle_key(key(KeyCode::Char('c')));

            assert!(app.state.share.is_copied());
            assert_eq!(
                app.state.notices.latest().map(|n| n.title.as_str()),
                Some("Link Copied!")
            );

            app.tick(Instant::now() + Duration::from_secs(3));
            assert!(!app.state.share.menu_open);
        }

        #[test]
        fn test_copy_link_failure_shows_notice() {
            let mut share = quiet_share();
            share.expect_copy_text().returning(|_| {
                Err(PlatformError::Clipboard(
                    arboard::Error::ClipboardNotSupported,
                ))
            });
            let mut app = build(immediate_submitter(), share, silent_audio());

            app.handle_key(key(KeyCode::Char('s')));
            app.handle_key(key(KeyCode::Char('c')));

            assert!(!app.state.share.is_copied());
            let notice = app.state.notices.latest().unwrap();
            assert_eq!(notice.title, "Failed to copy");
            assert_eq!(notice.variant, NoticeVariant::Destructive);
        }

        #[test]
        fn test_copy_shortcut_works_without_menu() {
            let mut share = quiet_share();
            share.expect_copy_text().times(1).returning(|_| Ok(()));
            let mut app = build(immediate_submitter(), share, silent_audio());
            app.handle_key(KeyEvent::new(KeyCode::Char('l'), COPY_MODIFIER));
            assert!(app.state.share.is_copied());
        }
    }

    mod music {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_unavailable_music_stays_inactive() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('m')));
            assert!(!app.state.music.is_playing());
            assert!(!app.state.music.is_available());
        }

        #[test]
        fn test_player_failure_degrades_control() {
            let mut audio = MockAudioPlayer::new();
            audio.expect_is_available().return_const(true);
            audio
                .expect_play()
                .returning(|| Err(PlatformError::Audio("no device".to_string())));
            let mut app = build(immediate_submitter(), quiet_share(), audio);

            app.handle_key(key(KeyCode::Char('m')));

            assert!(!app.state.music.is_playing());
            assert!(!app.state.music.is_available());
        }

        #[test]
        fn test_toggle_plays_and_pauses() {
            let mut audio = MockAudioPlayer::new();
            audio.expect_is_available().return_const(true);
            audio.expect_play().times(1).returning(|| Ok(()));
            audio.expect_pause().times(1).return_const(());
            let mut app = build(immediate_submitter(), quiet_share(), audio);

            app.toggle_music();
            assert!(app.state.music.is_playing());
            app.toggle_music();
            assert!(!app.state.music.is_playing());
        }
    }

    mod page {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_q_quits() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn test_any_key_skips_intro() {
            let mut app = test_app();
            app.state.intro = Some(IntroState::new());
            app.state.current_view = View::Intro;

            app.handle_key(key(KeyCode::Char('q')));

            assert!(!app.in_intro());
            assert!(app.state.intro.is_none());
            assert!(!app.should_quit());
        }

        #[test]
        fn test_gallery_keys_on_welcome() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.state.gallery.index(), 1);
            app.handle_key(key(KeyCode::Left));
            app.handle_key(key(KeyCode::Left));
            assert_eq!(app.state.gallery.index(), 2);
            app.handle_key(key(KeyCode::Char('1')));
            assert_eq!(app.state.gallery.index(), 0);
        }

        #[test]
        fn test_see_all_opens_selected_list() {
            let mut app = test_app();
            app.state.section = Section::Godparents;
            app.handle_key(key(KeyCode::Right));
            assert_eq!(app.state.selected_list, OverlayKind::Godmothers);
            app.handle_key(key(KeyCode::Enter));
            assert!(app.state.godmothers.is_visible());
            assert_eq!(app.state.focus, Focus::Page);
        }

        #[test]
        fn test_section_navigation() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.section, Section::Details);
            app.handle_key(key(KeyCode::BackTab));
            assert_eq!(app.state.section, Section::Welcome);
        }

        #[test]
        fn test_release_events_ignored() {
            let mut app = test_app();
            let mut release = key(KeyCode::Char('q'));
            release.kind = KeyEventKind::Release;
            app.handle_key(release);
            assert!(!app.should_quit());
        }
    }
}
