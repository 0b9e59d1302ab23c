//! Audio playback through an external player process

use super::traits::AudioPlayer;
use crate::error::PlatformError;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

/// Argument placeholder replaced by the resume position in whole seconds
const START_PLACEHOLDER: &str = "{start}";

/// Substitute the resume position into the player arguments
fn player_args(args: &[String], position: Duration) -> Vec<String> {
    let secs = position.as_secs().to_string();
    args.iter()
        .map(|arg| arg.replace(START_PLACEHOLDER, &secs))
        .collect()
}

/// Plays the configured track by spawning a player command
pub struct ProcessPlayer {
    /// Program followed by its arguments; the track path is appended
    command: Vec<String>,
    track: Option<PathBuf>,
    child: Option<Child>,
    /// Playback time accumulated before the current run
    position: Duration,
    started_at: Option<Instant>,
}

impl ProcessPlayer {
    pub fn new(command: Vec<String>, track: Option<PathBuf>) -> Self {
        Self {
            command,
            track,
            child: None,
            position: Duration::ZERO,
            started_at: None,
        }
    }
}

impl AudioPlayer for ProcessPlayer {
    fn is_available(&self) -> bool {
        !self.command.is_empty() && self.track.as_ref().is_some_and(|t| t.exists())
    }

    fn play(&mut self) -> Result<(), PlatformError> {
        if self.child.is_some() {
            return Ok(());
        }
        let track = self
            .track
            .as_ref()
            .ok_or_else(|| PlatformError::Audio("no music configured".to_string()))?;
        if !track.exists() {
            return Err(PlatformError::Audio(format!(
                "{} not found",
                track.display()
            )));
        }
        let (program, args) = self
            .command
            .split_first()
            .ok_or_else(|| PlatformError::Audio("no player command".to_string()))?;

        let mut child = Command::new(program)
            .args(player_args(args, self.position))
            .arg(track)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // A player that exits right away could not open the track
        if let Some(status) = child.try_wait()? {
            return Err(PlatformError::Audio(format!("player exited with {status}")));
        }
        tracing::info!(
            track = %track.display(),
            position_secs = self.position.as_secs(),
            "music started"
        );
        self.child = Some(child);
        self.started_at = Some(Instant::now());
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(err) = child.kill() {
                tracing::debug!(%err, "music player already stopped");
            }
            let _ = child.wait();
            if let Some(started) = self.started_at.take() {
                self.position += started.elapsed();
            }
            tracing::info!(position_secs = self.position.as_secs(), "music paused");
        }
    }
}

impl Drop for ProcessPlayer {
    fn drop(&mut self) {
        self.pause();
    }
}
