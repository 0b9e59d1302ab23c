//! Transient notices shown over the page

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual weight of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
    pub expires_at: Instant,
}

/// Queue of live notices, newest first
#[derive(Debug, Default)]
pub struct Notices {
    items: VecDeque<Notice>,
}

impl Notices {
    /// How long a notice stays on screen
    pub const LIFETIME: Duration = Duration::from_secs(4);
    /// Notices kept at once; older ones are dropped
    const MAX_VISIBLE: usize = 3;

    pub fn push(&mut self, title: &str, description: &str, variant: NoticeVariant) {
        self.push_at(title, description, variant, Instant::now());
    }

    pub fn push_at(&mut self, title: &str, description: &str, variant: NoticeVariant, now: Instant) {
        tracing::debug!(title, ?variant, "notice");
        self.items.push_front(Notice {
            title: title.to_string(),
            description: description.to_string(),
            variant,
            expires_at: now + Self::LIFETIME,
        });
        self.items.truncate(Self::MAX_VISIBLE);
    }

    /// Drop expired notices
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| n.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
