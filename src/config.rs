//! Configuration handling for the invitation

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "INVITE_TUI_CONFIG";

/// Default artificial delay standing in for a network round-trip
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
/// Default upper bound on a single submission
const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 10_000;
/// Minimum headroom of the submission timeout over the simulated delay
const SUBMIT_TIMEOUT_MARGIN: Duration = Duration::from_secs(1);
/// Default gallery auto-advance interval
const DEFAULT_GALLERY_INTERVAL_MS: u64 = 5000;

/// User configuration for the invitation
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InviteConfig {
    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Submission timeout in milliseconds
    pub submit_timeout_ms: Option<u64>,
    /// Show the RSVP section
    pub rsvp_enabled: Option<bool>,
    /// Play the intro animation at startup
    pub show_intro: Option<bool>,
    /// Background music file
    pub music_path: Option<PathBuf>,
    /// Player command used for background music (program followed by args);
    /// `{start}` in an argument becomes the resume position in seconds
    pub music_player: Option<Vec<String>>,
    /// Command invoked to share the invitation (receives title, text, url)
    pub share_command: Option<Vec<String>>,
    /// JSON file replacing the built-in invitation content
    pub invitation_path: Option<PathBuf>,
    /// Gallery auto-advance interval in milliseconds
    pub gallery_interval_ms: Option<u64>,
}

impl InviteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("com", "paragatos", "invite-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: InviteConfig = serde_json::from_str(&content)?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location, returning where it was written
    pub fn save(&self) -> Result<Option<PathBuf>> {
        match Self::config_path() {
            Some(path) => {
                self.save_to(&path)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    /// Submission timeout, raised when needed so it always outlasts the simulated delay
    pub fn submit_timeout(&self) -> Duration {
        let timeout =
            Duration::from_millis(self.submit_timeout_ms.unwrap_or(DEFAULT_SUBMIT_TIMEOUT_MS));
        timeout.max(self.submit_delay() + SUBMIT_TIMEOUT_MARGIN)
    }

    pub fn gallery_interval(&self) -> Duration {
        Duration::from_millis(
            self.gallery_interval_ms
                .unwrap_or(DEFAULT_GALLERY_INTERVAL_MS)
                .max(1),
        )
    }

    pub fn rsvp_enabled(&self) -> bool {
        self.rsvp_enabled.unwrap_or(true)
    }

    pub fn show_intro(&self) -> bool {
        self.show_intro.unwrap_or(true)
    }

    /// Player command, defaulting to a looping mpv at 30% volume that resumes
    /// from the paused position
    pub fn music_player(&self) -> Vec<String> {
        self.music_player.clone().unwrap_or_else(|| {
            [
                "mpv",
                "--no-video",
                "--loop=inf",
                "--volume=30",
                "--really-quiet",
                "--start={start}",
            ]
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }

    /// Directory for log files
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "paragatos", "invite-tui")
            .map(|dirs| dirs.data_local_dir().to_path_buf())
    }
}
