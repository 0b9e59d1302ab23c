//! Global key listener registry
//!
//! Overlays that react to the cancel key register here while they are
//! visible. A registration is held as a [`KeyListenerGuard`]; dropping the
//! guard removes the listener, so every exit path (close, replacement, drop
//! of the owning overlay) releases it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Which overlay a listener belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Godfathers,
    Godmothers,
}

#[derive(Debug)]
struct Registration {
    id: u64,
    target: OverlayKind,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<Registration>>,
}

impl Registry {
    fn lock(&self) -> MutexGuard<'_, Vec<Registration>> {
        self.listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Process-wide set of active cancel-key listeners
#[derive(Debug, Clone, Default)]
pub struct KeyListeners {
    inner: Arc<Registry>,
}

impl KeyListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for `target`; it stays active until the guard is dropped
    pub fn register(&self, target: OverlayKind) -> KeyListenerGuard {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.lock().push(Registration { id, target });
        tracing::trace!(id, ?target, "key listener registered");
        KeyListenerGuard {
            registry: Arc::downgrade(&self.inner),
            id,
            target,
        }
    }

    /// Targets of all active listeners, most recent last
    pub fn active(&self) -> Vec<OverlayKind> {
        self.inner.lock().iter().map(|r| r.target).collect()
    }

    /// Number of active listeners
    pub fn count(&self) -> usize {
        self.inner.lock().len()
    }

    /// Number of active listeners for one overlay
    pub fn count_for(&self, target: OverlayKind) -> usize {
        self.inner
            .lock()
            .iter()
            .filter(|r| r.target == target)
            .count()
    }
}

/// Scoped registration in [`KeyListeners`]
#[derive(Debug)]
pub struct KeyListenerGuard {
    registry: Weak<Registry>,
    id: u64,
    target: OverlayKind,
}

impl Drop for KeyListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().retain(|r| r.id != self.id);
            tracing::trace!(id = self.id, target = ?self.target, "key listener released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_registry_is_empty() {
        let listeners = KeyListeners::new();
        assert_eq!(listeners.count(), 0);
        assert!(listeners.active().is_empty());
    }

    #[test]
    fn test_register_and_drop() {
        let listeners = KeyListeners::new();
        let guard = listeners.register(OverlayKind::Godfathers);
        assert_eq!(listeners.active(), vec![OverlayKind::Godfathers]);

        drop(guard);
        assert_eq!(listeners.count(), 0);
    }

    #[test]
    fn test_dropping_one_guard_keeps_the_other() {
        let listeners = KeyListeners::new();
        let first = listeners.register(OverlayKind::Godfathers);
        let _second = listeners.register(OverlayKind::Godmothers);

        drop(first);
        assert_eq!(listeners.active(), vec![OverlayKind::Godmothers]);
    }

    #[test]
    fn test_clones_share_the_registry() {
        let listeners = KeyListeners::new();
        let clone = listeners.clone();
        let _guard = clone.register(OverlayKind::Godmothers);
        assert_eq!(listeners.count_for(OverlayKind::Godmothers), 1);
        assert_eq!(listeners.count_for(OverlayKind::Godfathers), 0);
    }

    #[test]
    fn test_guard_outliving_registry_does_not_panic() {
        let listeners = KeyListeners::new();
        let guard = listeners.register(OverlayKind::Godfathers);
        drop(listeners);
        drop(guard);
    }
}
