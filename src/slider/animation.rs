//! Time-based tween toward a resting offset.
//!
//! The animator is the single settle path for every transition: smooth
//! transitions tween with quadratic ease-out, instant ones carry a zero
//! duration and settle on the first tick. Either way [`SnapAnimator::tick`]
//! yields [`Tween::Settled`] exactly once per started animation, which is
//! what makes the completion event publish-once. Callers supply the clock
//! so ticks can be driven synthetically in tests.

use std::time::{Duration, Instant};

/// One advance of an animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tween {
    /// No animation in flight.
    Idle,
    /// Animation in flight; the offset to apply this frame.
    Moving(f32),
    /// Animation finished this frame; the final offset. Yielded once.
    Settled(f32),
}

#[derive(Debug, Clone)]
struct ActiveTween {
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
}

/// Tween animator snapping the slide strip to a target offset.
#[derive(Debug, Clone, Default)]
pub struct SnapAnimator {
    active: Option<ActiveTween>,
}

impl SnapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Begin animating from `current` to `target`. Supersedes any animation
    /// already in flight; the superseded one never settles.
    pub fn start(&mut self, current: f32, target: f32, duration: Duration, now: Instant) {
        self.active = Some(ActiveTween {
            start: current,
            target,
            started_at: now,
            duration,
        });
    }

    /// Advance the animation to `now`.
    pub fn tick(&mut self, now: Instant) -> Tween {
        let Some(tween) = &self.active else {
            return Tween::Idle;
        };
        let elapsed = now.saturating_duration_since(tween.started_at);
        if elapsed >= tween.duration {
            let target = tween.target;
            self.active = None;
            return Tween::Settled(target);
        }
        let t = (elapsed.as_secs_f32() / tween.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = ease_out(t);
        Tween::Moving(tween.start + (tween.target - tween.start) * eased)
    }

    /// Drop the current animation without settling it.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

// Quadratic ease-out.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
