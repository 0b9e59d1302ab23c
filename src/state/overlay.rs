//! Searchable list overlay state

use super::invitation::Entry;
use super::key_listener::{KeyListenerGuard, KeyListeners, OverlayKind};

/// What the overlay shows for the current query
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayView<'a> {
    /// Matching entries in their original order
    Results(Vec<&'a Entry>),
    /// Nothing matched the query
    NoResults,
}

/// Normalize a query for matching: trimmed and lowercased
fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// A fixed list of entries with a live name filter
#[derive(Debug)]
pub struct ListOverlay {
    kind: OverlayKind,
    title: String,
    entries: Vec<Entry>,
    /// Raw query text, stored verbatim
    query: String,
    /// First visible result row
    pub scroll_offset: usize,
    /// Present exactly while the overlay is visible
    listener: Option<KeyListenerGuard>,
}

impl ListOverlay {
    pub fn new(kind: OverlayKind, title: &str, entries: Vec<Entry>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            entries,
            query: String::new(),
            scroll_offset: 0,
            listener: None,
        }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_visible(&self) -> bool {
        self.listener.is_some()
    }

    /// Show the overlay and register its cancel-key listener
    pub fn open(&mut self, listeners: &KeyListeners) {
        if self.listener.is_none() {
            self.listener = Some(listeners.register(self.kind));
            tracing::debug!(
                overlay = ?self.kind,
                listeners = listeners.count_for(self.kind),
                "overlay opened"
            );
        }
    }

    /// Hide the overlay, releasing its listener. Idempotent.
    pub fn close(&mut self) {
        if self.listener.take().is_some() {
            tracing::debug!(overlay = ?self.kind, "overlay closed");
        }
    }

    /// Replace the query text
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.scroll_offset = 0;
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.scroll_offset = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.scroll_offset = 0;
    }

    /// Entries whose lowercased name contains the normalized query
    pub fn filtered(&self) -> Vec<&Entry> {
        let needle = normalize_query(&self.query);
        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Current results, or an explicit empty marker
    pub fn view(&self) -> OverlayView<'_> {
        let results = self.filtered();
        if results.is_empty() {
            OverlayView::NoResults
        } else {
            OverlayView::Results(results)
        }
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let max = self.filtered().len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + rows).min(max);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }
}
