//! Background music toggle state

use crate::audio::AudioPlayer;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct MusicState {
    playing: bool,
    available: bool,
    tooltip_until: Option<Instant>,
}

impl MusicState {
    /// How long the "Play music" hint stays up after launch
    pub const TOOLTIP_DURATION: Duration = Duration::from_secs(3);

    pub fn new(available: bool, now: Instant) -> Self {
        Self {
            playing: false,
            available,
            tooltip_until: Some(now + Self::TOOLTIP_DURATION),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// False once playback has failed or no track exists; the control renders dimmed
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn show_tooltip(&self) -> bool {
        self.tooltip_until.is_some()
    }

    /// Play or pause. Playback failures disable the control without surfacing an error.
    pub fn toggle(&mut self, player: &mut dyn AudioPlayer) {
        self.tooltip_until = None;
        if !self.available {
            return;
        }
        if self.playing {
            player.pause();
            self.playing = false;
            return;
        }
        match player.play() {
            Ok(()) => self.playing = true,
            Err(err) => {
                tracing::debug!(%err, "music playback unavailable");
                self.available = false;
                self.playing = false;
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.tooltip_until.is_some_and(|until| now >= until) {
            self.tooltip_until = None;
        }
    }
}
