//! The carousel widget: gesture state machine, discrete navigation, and
//! transition bookkeeping for one configured slider instance.
//!
//! A `Slider` owns no rendering and no I/O. Pointer handlers feed it cell
//! coordinates, the app tick drives its animator, and every settled
//! transition surfaces exactly one [`SliderEvent::TransitionEnd`] which the
//! app republishes on the event bus.

pub mod animation;

use crate::config::model::SliderConfig;
use animation::{SnapAnimator, Tween};
use std::time::{Duration, Instant};

/// Where a pointer gesture currently stands.
///
/// Transitions only along `NotSliding -> StartSliding -> CurrentlySliding ->
/// NotSliding`, or collapse back to `NotSliding` when a move is judged
/// vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    NotSliding,
    StartSliding,
    CurrentlySliding,
}

/// Signal surfaced by [`Slider::tick`] when a transition settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderEvent {
    TransitionEnd { slide_index: usize },
}

/// Derived state of the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub active_handle: Option<usize>,
}

/// Content of one slide, fixed at construction.
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub lines: Vec<String>,
}

/// One carousel instance.
pub struct Slider {
    id: String,
    slides: Vec<Slide>,
    current_slide: usize,
    pixel_offset: f32,
    start_pixel_offset: f32,
    gesture: GesturePhase,
    gesture_origin: (i32, i32),
    viewport_width: u16,
    animator: SnapAnimator,
    animation: Duration,
    animations_enabled: bool,
    controls: ControlState,
    destroyed: bool,
}

impl Slider {
    /// Build an instance from its configuration.
    ///
    /// The start index is clamped into range. A nonzero start jumps straight
    /// to that slide's resting offset without animating and without
    /// signaling a transition. A config with no slides yields an inert
    /// instance: every operation on it is a no-op.
    pub fn new(cfg: &SliderConfig, animations_enabled: bool, animation: Duration) -> Self {
        let slides: Vec<Slide> = cfg
            .slides
            .iter()
            .map(|s| Slide {
                title: s.title.clone(),
                lines: s.lines.clone(),
            })
            .collect();
        let start = cfg.start.min(slides.len().saturating_sub(1));
        let mut slider = Self {
            id: cfg.id.clone(),
            slides,
            current_slide: start,
            pixel_offset: 0.0,
            start_pixel_offset: 0.0,
            gesture: GesturePhase::NotSliding,
            gesture_origin: (0, 0),
            viewport_width: 0,
            animator: SnapAnimator::new(),
            animation,
            animations_enabled,
            controls: ControlState::default(),
            destroyed: false,
        };
        slider.snap_to_rest();
        slider.update_controls();
        slider
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn pixel_offset(&self) -> f32 {
        self.pixel_offset
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.gesture
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn is_inert(&self) -> bool {
        self.destroyed || self.slides.is_empty()
    }

    fn resting_offset(&self) -> f32 {
        // Negative because the strip shifts left as the index grows.
        -(self.current_slide as f32) * f32::from(self.viewport_width)
    }

    fn snap_to_rest(&mut self) {
        self.animator.cancel();
        self.pixel_offset = self.resting_offset();
    }

    /// Update the viewport width after layout or a terminal resize.
    ///
    /// At rest the strip snaps silently to the new resting offset. An
    /// animation in flight is retargeted and still settles exactly once. A
    /// live drag keeps its offset; the commit on release uses the new width.
    pub fn set_viewport_width(&mut self, width: u16, now: Instant) {
        if self.is_inert() || width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        if self.animator.is_active() {
            self.animate(now);
        } else if self.gesture != GesturePhase::CurrentlySliding {
            self.snap_to_rest();
        }
    }

    /// Pointer pressed on the slide strip.
    pub fn gesture_start(&mut self, x: i32, y: i32) {
        if self.is_inert() {
            return;
        }
        if self.gesture == GesturePhase::NotSliding {
            self.gesture = GesturePhase::StartSliding;
            self.gesture_origin = (x, y);
        }
    }

    /// Pointer moved while pressed. Returns whether the strip offset
    /// changed and a redraw is needed.
    pub fn gesture_move(&mut self, x: i32, y: i32) -> bool {
        if self.is_inert() || self.gesture == GesturePhase::NotSliding {
            return false;
        }

        let delta_y = (y - self.gesture_origin.1).abs();
        let delta_x = x - self.gesture_origin.0;

        if delta_y > delta_x.abs() {
            // Vertical intent: surrender the gesture and settle the strip
            // back where it belongs, without committing anything.
            let was_dragging = self.gesture == GesturePhase::CurrentlySliding;
            self.gesture = GesturePhase::NotSliding;
            if was_dragging {
                self.snap_to_rest();
            }
            tracing::debug!(slider = %self.id, "gesture judged vertical, aborted");
            return was_dragging;
        }

        if self.gesture == GesturePhase::StartSliding && delta_x != 0 {
            self.gesture = GesturePhase::CurrentlySliding;
            self.start_pixel_offset = self.pixel_offset;
            self.animator.cancel();
        }

        if self.gesture != GesturePhase::CurrentlySliding {
            return false;
        }

        // Half-speed tracking past the natural bounds: first slide dragged
        // rightward or last slide dragged leftward.
        let last = self.slides.len() - 1;
        let ratio = if (self.current_slide == 0 && x > self.gesture_origin.0)
            || (self.current_slide == last && x < self.gesture_origin.0)
        {
            2.0
        } else {
            1.0
        };
        self.pixel_offset = self.start_pixel_offset + delta_x as f32 / ratio;
        true
    }

    /// Pointer released. Commits an index change of exactly one slide when
    /// a drag was in progress; a tap that never promoted is a no-op.
    pub fn gesture_end(&mut self, now: Instant) {
        if self.is_inert() {
            return;
        }
        let was_dragging = self.gesture == GesturePhase::CurrentlySliding;
        self.gesture = GesturePhase::NotSliding;
        if !was_dragging {
            return;
        }
        let direction: isize = if self.pixel_offset < self.start_pixel_offset {
            1
        } else {
            -1
        };
        let target = self.current_slide as isize + direction;
        tracing::debug!(slider = %self.id, target, "drag released");
        self.step(target, now);
    }

    /// Navigate to `target`, clamped into range. Shared by arrow clicks,
    /// handle clicks, jump targets, and arrow keys.
    pub fn step(&mut self, target: isize, now: Instant) {
        if self.is_inert() {
            return;
        }
        let last = (self.slides.len() - 1) as isize;
        self.current_slide = target.clamp(0, last) as usize;
        self.animate(now);
        self.update_controls();
    }

    /// Start the settle toward the committed slide's resting offset: a
    /// smooth tween when animations are available, an instant settle
    /// otherwise. Either way every call yields exactly one transition-end
    /// signal from [`Slider::tick`]; restarting supersedes an in-flight
    /// settle, which then never signals.
    fn animate(&mut self, now: Instant) {
        let duration = if self.animations_enabled {
            self.animation
        } else {
            Duration::ZERO
        };
        self.animator
            .start(self.pixel_offset, self.resting_offset(), duration, now);
    }

    /// Advance the animator. Yields the transition-end signal when the
    /// strip settles.
    pub fn tick(&mut self, now: Instant) -> Option<SliderEvent> {
        if self.destroyed {
            return None;
        }
        match self.animator.tick(now) {
            Tween::Idle => None,
            Tween::Moving(offset) => {
                self.pixel_offset = offset;
                None
            }
            Tween::Settled(offset) => {
                self.pixel_offset = offset;
                Some(SliderEvent::TransitionEnd {
                    slide_index: self.current_slide,
                })
            }
        }
    }

    /// Recompute the derived control flags from the committed index.
    pub fn update_controls(&mut self) {
        if self.slides.is_empty() {
            self.controls = ControlState::default();
            return;
        }
        self.controls = ControlState {
            prev_enabled: self.current_slide > 0,
            next_enabled: self.current_slide < self.slides.len() - 1,
            active_handle: Some(self.current_slide),
        };
    }

    /// Make the instance inert. All subsequent input, navigation, and ticks
    /// are ignored; state fields are not reset and the instance is not
    /// reusable.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.animator.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::SlideConfig;

    const ANIM: Duration = Duration::from_millis(300);

    fn config(n: usize, start: usize) -> SliderConfig {
        SliderConfig {
            id: "s1".into(),
            start,
            slides: (0..n)
                .map(|i| SlideConfig {
                    title: format!("slide {i}"),
                    lines: vec![],
                })
                .collect(),
        }
    }

    fn slider(n: usize, width: u16) -> (Slider, Instant) {
        let t0 = Instant::now();
        let mut s = Slider::new(&config(n, 0), true, ANIM);
        s.set_viewport_width(width, t0);
        (s, t0)
    }

    /// Tick past the animation duration and collect the settle signal.
    fn settle(s: &mut Slider, now: Instant) -> Vec<SliderEvent> {
        let mut events = Vec::new();
        for i in 1..=3u64 {
            if let Some(ev) = s.tick(now + Duration::from_millis(400 * i)) {
                events.push(ev);
            }
        }
        events
    }

    #[test]
    fn test_step_clamps_into_range() {
        let (mut s, t0) = slider(5, 300);

        s.step(1, t0);
        assert_eq!(s.current_slide(), 1);

        s.step(10, t0);
        assert_eq!(s.current_slide(), 4);

        s.step(-1, t0);
        assert_eq!(s.current_slide(), 0);
    }

    #[test]
    fn test_settled_offset_matches_index() {
        let (mut s, t0) = slider(5, 300);
        s.step(1, t0);
        let events = settle(&mut s, t0);
        assert_eq!(events, vec![SliderEvent::TransitionEnd { slide_index: 1 }]);
        assert_eq!(s.pixel_offset(), -300.0);

        s.step(4, t0);
        settle(&mut s, t0);
        assert_eq!(s.pixel_offset(), -1200.0);
    }

    #[test]
    fn test_scenario_five_slides() {
        let (mut s, t0) = slider(5, 300);

        s.step(1, t0);
        settle(&mut s, t0);
        assert_eq!(s.pixel_offset(), -300.0);
        assert_eq!(s.controls().active_handle, Some(1));
        assert!(s.controls().prev_enabled);
        assert!(s.controls().next_enabled);

        s.step(4, t0);
        assert!(!s.controls().next_enabled);
        assert!(s.controls().prev_enabled);

        s.step(10, t0);
        assert_eq!(s.current_slide(), 4);

        s.step(-1, t0);
        assert_eq!(s.current_slide(), 0);
        assert!(!s.controls().prev_enabled);
        assert!(s.controls().next_enabled);
    }

    #[test]
    fn test_transition_signals_once_on_animated_path() {
        let (mut s, t0) = slider(3, 100);
        s.step(1, t0);

        assert_eq!(s.tick(t0 + Duration::from_millis(100)), None);
        assert!(s.is_animating());
        assert_eq!(
            s.tick(t0 + Duration::from_millis(300)),
            Some(SliderEvent::TransitionEnd { slide_index: 1 })
        );
        assert_eq!(s.tick(t0 + Duration::from_millis(400)), None);
        assert_eq!(s.tick(t0 + Duration::from_millis(500)), None);
    }

    #[test]
    fn test_transition_signals_once_on_instant_path() {
        let t0 = Instant::now();
        let mut s = Slider::new(&config(3, 0), false, ANIM);
        s.set_viewport_width(100, t0);

        s.step(2, t0);
        assert_eq!(
            s.tick(t0),
            Some(SliderEvent::TransitionEnd { slide_index: 2 })
        );
        assert_eq!(s.pixel_offset(), -200.0);
        assert_eq!(s.tick(t0), None);
    }

    #[test]
    fn test_superseded_transition_signals_once_total() {
        let (mut s, t0) = slider(5, 300);
        s.step(1, t0);
        assert_eq!(s.tick(t0 + Duration::from_millis(100)), None);

        // Restart toward slide 2 before the first settle.
        s.step(2, t0 + Duration::from_millis(150));

        let mut events = Vec::new();
        for ms in [200u64, 300, 450, 600, 900] {
            if let Some(ev) = s.tick(t0 + Duration::from_millis(ms)) {
                events.push(ev);
            }
        }
        assert_eq!(events, vec![SliderEvent::TransitionEnd { slide_index: 2 }]);
        assert_eq!(s.pixel_offset(), -600.0);
    }

    #[test]
    fn test_drag_left_advances_one() {
        let (mut s, t0) = slider(5, 300);

        s.gesture_start(100, 50);
        assert_eq!(s.gesture_phase(), GesturePhase::StartSliding);

        assert!(s.gesture_move(60, 50));
        assert_eq!(s.gesture_phase(), GesturePhase::CurrentlySliding);
        assert_eq!(s.pixel_offset(), -40.0);

        s.gesture_end(t0);
        assert_eq!(s.gesture_phase(), GesturePhase::NotSliding);
        assert_eq!(s.current_slide(), 1);

        let events = settle(&mut s, t0);
        assert_eq!(events, vec![SliderEvent::TransitionEnd { slide_index: 1 }]);
        assert_eq!(s.pixel_offset(), -300.0);
    }

    #[test]
    fn test_drag_commits_at_most_one_slide() {
        let (mut s, t0) = slider(5, 300);
        s.gesture_start(100, 50);
        s.gesture_move(-900, 50);
        s.gesture_end(t0);
        assert_eq!(s.current_slide(), 1);
    }

    #[test]
    fn test_drag_right_retreats_one() {
        let t0 = Instant::now();
        let mut s = Slider::new(&config(5, 2), true, ANIM);
        s.set_viewport_width(300, t0);
        assert_eq!(s.pixel_offset(), -600.0);

        s.gesture_start(100, 50);
        s.gesture_move(140, 50);
        assert_eq!(s.pixel_offset(), -560.0);
        s.gesture_end(t0);
        assert_eq!(s.current_slide(), 1);
    }

    #[test]
    fn test_release_at_start_offset_retreats() {
        // A drag that returns to its starting offset counts as rightward
        // movement and retreats.
        let t0 = Instant::now();
        let mut s = Slider::new(&config(5, 2), true, ANIM);
        s.set_viewport_width(300, t0);

        s.gesture_start(100, 50);
        s.gesture_move(95, 50);
        s.gesture_move(100, 50);
        assert_eq!(s.pixel_offset(), -600.0);
        s.gesture_end(t0);
        assert_eq!(s.current_slide(), 1);
    }

    #[test]
    fn test_rubber_band_first_slide() {
        let (mut s, _t0) = slider(5, 300);
        s.gesture_start(100, 50);
        s.gesture_move(140, 50);
        // Rightward past the first slide tracks at half speed.
        assert_eq!(s.pixel_offset(), 20.0);
    }

    #[test]
    fn test_rubber_band_last_slide() {
        let t0 = Instant::now();
        let mut s = Slider::new(&config(5, 4), true, ANIM);
        s.set_viewport_width(300, t0);

        s.gesture_start(100, 50);
        s.gesture_move(60, 50);
        assert_eq!(s.pixel_offset(), -1220.0);
    }

    #[test]
    fn test_no_rubber_band_in_the_middle() {
        let t0 = Instant::now();
        let mut s = Slider::new(&config(5, 2), true, ANIM);
        s.set_viewport_width(300, t0);

        s.gesture_start(100, 50);
        s.gesture_move(60, 50);
        assert_eq!(s.pixel_offset(), -640.0);
    }

    #[test]
    fn test_vertical_move_aborts_without_commit() {
        let (mut s, _t0) = slider(5, 300);
        s.gesture_start(100, 50);
        s.gesture_move(110, 90);
        assert_eq!(s.gesture_phase(), GesturePhase::NotSliding);
        assert_eq!(s.current_slide(), 0);
        assert_eq!(s.pixel_offset(), 0.0);
    }

    #[test]
    fn test_vertical_abort_after_promotion_snaps_back() {
        let (mut s, t0) = slider(5, 300);
        s.gesture_start(100, 50);
        s.gesture_move(60, 50);
        assert_eq!(s.pixel_offset(), -40.0);

        s.gesture_move(95, 120);
        assert_eq!(s.gesture_phase(), GesturePhase::NotSliding);
        assert_eq!(s.pixel_offset(), 0.0);
        assert_eq!(s.current_slide(), 0);

        // Nothing settles, nothing signals.
        assert!(settle(&mut s, t0).is_empty());
    }

    #[test]
    fn test_tap_is_a_no_op() {
        let (mut s, t0) = slider(5, 300);
        s.gesture_start(100, 50);
        s.gesture_end(t0);
        assert_eq!(s.current_slide(), 0);
        assert!(settle(&mut s, t0).is_empty());
    }

    #[test]
    fn test_pure_vertical_wiggle_does_not_promote() {
        let (mut s, _t0) = slider(5, 300);
        s.gesture_start(100, 50);
        assert!(!s.gesture_move(100, 50));
        assert_eq!(s.gesture_phase(), GesturePhase::StartSliding);
    }

    #[test]
    fn test_start_index_jumps_without_signal() {
        let t0 = Instant::now();
        let mut s = Slider::new(&config(5, 2), true, ANIM);
        s.set_viewport_width(300, t0);
        assert_eq!(s.current_slide(), 2);
        assert_eq!(s.pixel_offset(), -600.0);
        assert_eq!(s.controls().active_handle, Some(2));
        assert!(settle(&mut s, t0).is_empty());
    }

    #[test]
    fn test_start_index_clamped() {
        let s = Slider::new(&config(3, 10), true, ANIM);
        assert_eq!(s.current_slide(), 2);
    }

    #[test]
    fn test_controls_track_edges() {
        let (mut s, t0) = slider(3, 100);
        assert!(!s.controls().prev_enabled);
        assert!(s.controls().next_enabled);
        assert_eq!(s.controls().active_handle, Some(0));

        s.step(1, t0);
        assert!(s.controls().prev_enabled);
        assert!(s.controls().next_enabled);
        assert_eq!(s.controls().active_handle, Some(1));

        s.step(2, t0);
        assert!(s.controls().prev_enabled);
        assert!(!s.controls().next_enabled);
        assert_eq!(s.controls().active_handle, Some(2));
    }

    #[test]
    fn test_empty_config_is_inert() {
        let t0 = Instant::now();
        let mut s = Slider::new(&config(0, 0), true, ANIM);
        s.set_viewport_width(300, t0);
        s.gesture_start(10, 10);
        s.gesture_move(50, 10);
        s.gesture_end(t0);
        s.step(3, t0);
        assert_eq!(s.current_slide(), 0);
        assert_eq!(s.pixel_offset(), 0.0);
        assert_eq!(s.controls().active_handle, None);
        assert!(settle(&mut s, t0).is_empty());
    }

    #[test]
    fn test_destroyed_ignores_everything() {
        let (mut s, t0) = slider(5, 300);
        s.destroy();
        assert!(s.is_destroyed());
        s.step(2, t0);
        s.gesture_start(100, 50);
        s.gesture_move(60, 50);
        s.gesture_end(t0);
        assert_eq!(s.current_slide(), 0);
        assert!(settle(&mut s, t0).is_empty());
    }

    #[test]
    fn test_destroy_mid_transition_suppresses_signal() {
        let (mut s, t0) = slider(5, 300);
        s.step(1, t0);
        s.destroy();
        assert!(settle(&mut s, t0).is_empty());
    }

    #[test]
    fn test_resize_at_rest_snaps_silently() {
        let (mut s, t0) = slider(5, 300);
        s.step(1, t0);
        settle(&mut s, t0);

        s.set_viewport_width(200, t0 + Duration::from_secs(2));
        assert_eq!(s.pixel_offset(), -200.0);
        assert!(settle(&mut s, t0 + Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn test_resize_mid_transition_retargets_and_signals_once() {
        let (mut s, t0) = slider(5, 300);
        s.step(1, t0);
        s.tick(t0 + Duration::from_millis(100));

        s.set_viewport_width(200, t0 + Duration::from_millis(150));
        let events = settle(&mut s, t0 + Duration::from_millis(150));
        assert_eq!(events, vec![SliderEvent::TransitionEnd { slide_index: 1 }]);
        assert_eq!(s.pixel_offset(), -200.0);
    }
}
