use crate::config::AppConfig;
use crate::slider::Slider;
use crate::ui::layout;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

pub struct AppState {
    pub config: AppConfig,
    pub sliders: Vec<Slider>,
    /// Index of the slider receiving keyboard input.
    pub focus: usize,
    /// Last known terminal area, kept for mouse hit-testing between draws.
    pub terminal_area: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, animations_supported: bool) -> Self {
        let animations = animations_supported && config.ui.animations;
        let animation = Duration::from_millis(config.ui.animation_ms);
        let sliders = config
            .sliders
            .iter()
            .map(|cfg| Slider::new(cfg, animations, animation))
            .collect();
        Self {
            config,
            sliders,
            focus: 0,
            terminal_area: Rect::default(),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn focused_slider_mut(&mut self) -> Option<&mut Slider> {
        let focus = self.focus;
        self.sliders.get_mut(focus)
    }

    pub fn cycle_focus(&mut self) {
        if self.sliders.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.sliders.len();
        self.dirty = true;
    }

    /// Record the terminal area and push the resulting viewport widths into
    /// every slider.
    pub fn set_terminal_area(&mut self, area: Rect, now: Instant) {
        self.terminal_area = area;
        let app_layout = layout::compute_layout(area, self.sliders.len());
        for (slider, slot) in self.sliders.iter_mut().zip(app_layout.sliders.iter()) {
            slider.set_viewport_width(slot.strip.width, now);
        }
        self.dirty = true;
    }
}
