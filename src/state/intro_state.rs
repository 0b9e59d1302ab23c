//! Intro animation state: the invitation lines appear one by one, then scroll away

use std::time::{Duration, Instant};

/// Animation phase for the intro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Lines fading in one after another
    Reveal,
    /// All lines shown
    Hold,
    /// Text animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Intro animation state
#[derive(Debug)]
pub struct IntroState {
    /// When the intro started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: IntroPhase,
    /// Number of intro lines currently shown
    pub visible_lines: usize,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl IntroState {
    /// Delay before each line appears, in order
    const LINE_DELAYS: [Duration; 4] = [
        Duration::from_millis(200),
        Duration::from_millis(400),
        Duration::from_millis(800),
        Duration::from_millis(1000),
    ];
    /// Time at which the scroll-up starts
    const HOLD_UNTIL: Duration = Duration::from_millis(2200);
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self::new_at(Instant::now())
    }

    pub fn new_at(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: IntroPhase::Reveal,
            visible_lines: 0,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update_at(&mut self, now: Instant, terminal_height: u16) {
        if self.phase == IntroPhase::Complete {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);

        self.visible_lines = Self::LINE_DELAYS
            .iter()
            .filter(|delay| elapsed >= **delay)
            .count();

        if self.visible_lines < Self::LINE_DELAYS.len() {
            self.phase = IntroPhase::Reveal;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::HOLD_UNTIL {
            self.phase = IntroPhase::Hold;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::HOLD_UNTIL + Self::ANIMATION_DURATION {
            self.phase = IntroPhase::ScrollUp;
            let progress = (elapsed - Self::HOLD_UNTIL).as_secs_f32()
                / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = IntroPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = IntroPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == IntroPhase::Complete
    }
}

impl Default for IntroState {
    fn default() -> Self {
        Self::new()
    }
}
