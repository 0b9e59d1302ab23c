//! Share via a configured command, copy via the system clipboard

use super::traits::SharePlatform;
use crate::error::PlatformError;
use crate::state::ShareData;
use arboard::Clipboard;
use std::process::Stdio;
use tokio::process::Command;
use tokio::runtime::Handle;

pub struct SystemShare {
    /// Program followed by its arguments; title, text and url are appended
    command: Option<Vec<String>>,
    /// Kept alive so the copied text survives on X11
    clipboard: Option<Clipboard>,
}

impl SystemShare {
    pub fn new(command: Option<Vec<String>>) -> Self {
        Self {
            command: command.filter(|c| !c.is_empty()),
            clipboard: None,
        }
    }
}

impl SharePlatform for SystemShare {
    fn can_share(&self) -> bool {
        self.command.is_some()
    }

    /// Start the share command and return without waiting for it;
    /// its exit status is only logged
    fn share(&mut self, data: &ShareData) -> Result<(), PlatformError> {
        let (program, args) = self
            .command
            .as_deref()
            .and_then(|c| c.split_first())
            .ok_or(PlatformError::ShareUnavailable)?;
        let runtime = Handle::try_current()
            .map_err(|err| PlatformError::ShareFailed(err.to_string()))?;

        let mut child = {
            let _guard = runtime.enter();
            Command::new(program)
                .args(args)
                .args([&data.title, &data.text, &data.url])
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()?
        };

        let program = program.clone();
        runtime.spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => {
                    tracing::debug!(%program, "share command finished")
                }
                Ok(status) => tracing::warn!(%program, %status, "share command failed"),
                Err(err) => tracing::warn!(%program, %err, "share command did not finish"),
            }
        });
        Ok(())
    }

    fn copy_text(&mut self, text: &str) -> Result<(), PlatformError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new()?);
        }
        if let Some(clipboard) = self.clipboard.as_mut() {
            clipboard.set_text(text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Invitation;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_no_command_means_no_share() {
        let mut share = SystemShare::new(None);
        assert!(!share.can_share());
        assert!(matches!(
            share.share(&Invitation::default().share),
            Err(PlatformError::ShareUnavailable)
        ));
    }

    #[test]
    fn test_empty_command_is_ignored() {
        let share = SystemShare::new(Some(vec![]));
        assert!(!share.can_share());
    }

    #[test]
    fn test_share_outside_runtime_fails() {
        let mut share = SystemShare::new(Some(vec!["true".to_string()]));
        assert!(matches!(
            share.share(&Invitation::default().share),
            Err(PlatformError::ShareFailed(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_successful_command() {
        let mut share = SystemShare::new(Some(vec!["true".to_string()]));
        assert!(share.can_share());
        assert!(share.share(&Invitation::default().share).is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_command_is_only_logged() {
        let mut share = SystemShare::new(Some(vec!["false".to_string()]));
        assert!(share.share(&Invitation::default().share).is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_share_returns_while_command_runs() {
        let mut share = SystemShare::new(Some(vec![
            "sh".to_string(),
            "-c".to_string(),
            "sleep 2".to_string(),
        ]));
        let started = Instant::now();
        assert!(share.share(&Invitation::default().share).is_ok());
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_missing_program_is_io_error() {
        let mut share = SystemShare::new(Some(vec!["invite-tui-no-such-share".to_string()]));
        assert!(matches!(
            share.share(&Invitation::default().share),
            Err(PlatformError::Io(_))
        ));
    }
}
