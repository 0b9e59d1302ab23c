//! Trait abstraction for audio playback to enable mocking in tests

use crate::error::PlatformError;

/// Looping background music playback
#[cfg_attr(test, mockall::automock)]
pub trait AudioPlayer: Send {
    /// Whether a track is configured at all
    fn is_available(&self) -> bool;

    /// Start (or resume) playback
    fn play(&mut self) -> Result<(), PlatformError>;

    /// Stop playback; no-op when not playing
    fn pause(&mut self);
}
