//! Background music playback

mod player;
mod traits;

pub use player::ProcessPlayer;
pub use traits::AudioPlayer;

#[cfg(test)]
pub use traits::MockAudioPlayer;
