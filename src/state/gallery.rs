//! Photo carousel state

use std::time::{Duration, Instant};

/// Direction of the last slide change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug)]
pub struct GalleryState {
    len: usize,
    index: usize,
    pub direction: SlideDirection,
    interval: Duration,
    last_change: Instant,
}

impl GalleryState {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self::new_at(len, interval, Instant::now())
    }

    pub fn new_at(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            len: len.max(1),
            index: 0,
            direction: SlideDirection::Forward,
            interval,
            last_change: now,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) {
        self.next_at(Instant::now());
    }

    pub fn prev(&mut self) {
        self.prev_at(Instant::now());
    }

    fn next_at(&mut self, now: Instant) {
        self.direction = SlideDirection::Forward;
        self.index = (self.index + 1) % self.len;
        self.last_change = now;
    }

    fn prev_at(&mut self, now: Instant) {
        self.direction = SlideDirection::Backward;
        self.index = (self.index + self.len - 1) % self.len;
        self.last_change = now;
    }

    /// Jump straight to a photo; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len || index == self.index {
            return;
        }
        self.direction = if index > self.index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.index = index;
        self.last_change = Instant::now();
    }

    /// Auto-advance once the interval has elapsed since the last change
    pub fn tick(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_change) >= self.interval {
            self.next_at(now);
            true
        } else {
            false
        }
    }
}
