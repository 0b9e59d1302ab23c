//! Error types for the invitation

use thiserror::Error;

/// Errors produced while submitting an RSVP
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RsvpError {
    /// A required field was left empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The submission could not reach its destination
    #[error("Submission failed: {message}")]
    Transport {
        message: String,
        /// Whether the guest can simply send the form again
        retryable: bool,
    },
}

impl RsvpError {
    /// Build a transport error
    pub fn transport(message: impl Into<String>, retryable: bool) -> Self {
        Self::Transport {
            message: message.into(),
            retryable,
        }
    }

    /// Whether resubmitting may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            RsvpError::MissingField(_) => false,
            RsvpError::Transport { retryable, .. } => *retryable,
        }
    }
}

/// Failures of optional platform capabilities (share, clipboard, audio)
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("No share capability is available")]
    ShareUnavailable,

    #[error("Share failed: {0}")]
    ShareFailed(String),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("Audio unavailable: {0}")]
    Audio(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with the invitation content
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{list} contains an entry with an empty name")]
    EmptyName { list: &'static str },

    #[error("{list} contains \"{name}\" more than once")]
    DuplicateName { list: &'static str, name: String },

    #[error("Invitation has no photos")]
    NoPhotos,

    #[error("Failed to read invitation: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse invitation: {0}")]
    Parse(#[from] serde_json::Error),
}
