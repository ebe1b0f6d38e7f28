// SPDX-License-Identifier: MPL-2.0
//! Time-based animation state.
//!
//! Every type here is a pure function of `Instant`: callers pass the current
//! time in, so the same state can be driven by the animation tick at runtime
//! and by fixed instants in tests.

use crate::ui::design_tokens::motion;
use std::time::{Duration, Instant};

/// Cubic ease-in-out on `0..=1`.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Cubic ease-out on `0..=1`.
#[must_use]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear progress of a timed segment, `0.0` before `start + delay` and
/// `1.0` once `duration` has elapsed.
#[must_use]
pub fn progress(start: Instant, delay: Duration, duration: Duration, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(start);
    let Some(active) = elapsed.checked_sub(delay) else {
        return 0.0;
    };
    if duration.is_zero() {
        return 1.0;
    }
    (active.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

// =============================================================================
// Reveal
// =============================================================================

/// One-shot "animate when first in view" timer.
///
/// Starting is idempotent: once a section has been revealed, scrolling away
/// and back does not replay its animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    started: Option<Instant>,
}

impl Reveal {
    /// Starts the reveal if it has not started yet. Returns `true` when this
    /// call started it.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.started.is_some() {
            return false;
        }
        self.started = Some(now);
        true
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started.is_some()
    }

    /// Eased progress of a segment relative to the reveal start.
    #[must_use]
    pub fn eased(&self, delay: Duration, duration: Duration, now: Instant) -> f32 {
        self.started
            .map_or(0.0, |start| ease_out(progress(start, delay, duration, now)))
    }

    /// Fade-in opacity of the revealed content.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.eased(Duration::ZERO, motion::REVEAL, now)
    }

    /// Whether a segment ending `total` after the start is still running.
    #[must_use]
    pub fn is_running(&self, total: Duration, now: Instant) -> bool {
        self.started
            .is_some_and(|start| now.saturating_duration_since(start) < total)
    }
}

// =============================================================================
// Smooth scroll
// =============================================================================

/// Eased vertical scroll from one offset to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(from: f32, to: f32, now: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started: now,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`; exactly the target once the duration has elapsed.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let t = ease_in_out(progress(self.started, Duration::ZERO, self.duration, now));
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

// =============================================================================
// Typewriter
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding { since: Instant },
    Deleting,
}

/// Headline that types a phrase, holds it, deletes it and moves on to the
/// next phrase, forever.
///
/// Advanced by [`Typewriter::step`] on every typing tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    // Visible prefix length, in chars.
    visible: usize,
    phase: Phase,
    hold: Duration,
}

impl Typewriter {
    #[must_use]
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            phrase: 0,
            visible: 0,
            phase: Phase::Typing,
            hold: motion::TYPE_HOLD,
        }
    }

    #[must_use]
    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    fn current(&self) -> &'static str {
        self.phrases.get(self.phrase).copied().unwrap_or_default()
    }

    /// Currently visible text.
    #[must_use]
    pub fn text(&self) -> &'static str {
        let phrase = self.current();
        let end = phrase
            .char_indices()
            .nth(self.visible)
            .map_or(phrase.len(), |(index, _)| index);
        &phrase[..end]
    }

    /// Interval until the next step should run in the current phase.
    #[must_use]
    pub fn step_interval(&self) -> Duration {
        match self.phase {
            Phase::Typing | Phase::Holding { .. } => motion::TYPE_CHAR,
            Phase::Deleting => motion::DELETE_CHAR,
        }
    }

    /// Advances by one character, or checks whether the hold has elapsed.
    pub fn step(&mut self, now: Instant) {
        if self.phrases.is_empty() {
            return;
        }

        let length = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.visible < length {
                    self.visible += 1;
                }
                if self.visible >= length {
                    self.phase = Phase::Holding { since: now };
                }
            }
            Phase::Holding { since } => {
                if now.saturating_duration_since(since) >= self.hold {
                    self.phase = Phase::Deleting;
                }
            }
            Phase::Deleting => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}
