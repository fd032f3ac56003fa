//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_sliders")]
    pub sliders: Vec<SliderConfig>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sliders: default_sliders(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration error raised by [`AppConfig::validate`].
///
/// Only structural problems are rejected; out-of-range `start` indices are
/// clamped at construction time instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("slider id must not be empty")]
    EmptyId,
    #[error("duplicate slider id: {0}")]
    DuplicateId(String),
}

impl AppConfig {
    /// Check structural validity: slider ids must be non-empty and unique.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for slider in &self.sliders {
            if slider.id.is_empty() {
                return Err(ConfigError::EmptyId);
            }
            if !seen.insert(slider.id.as_str()) {
                return Err(ConfigError::DuplicateId(slider.id.clone()));
            }
        }
        Ok(())
    }
}

fn default_sliders() -> Vec<SliderConfig> {
    vec![
        SliderConfig {
            id: "tour".into(),
            start: 0,
            slides: vec![
                SlideConfig {
                    title: "Welcome to crabslide".into(),
                    lines: vec![
                        "A touch-style carousel for the terminal.".into(),
                        String::new(),
                        "Drag a slide with the mouse, or use the controls below.".into(),
                    ],
                },
                SlideConfig {
                    title: "Gestures".into(),
                    lines: vec![
                        "Press and drag a slide left or right, then release.".into(),
                        "Dragging past the first or last slide rubber-bands.".into(),
                        "A mostly-vertical drag is handed back to the terminal.".into(),
                    ],
                },
                SlideConfig {
                    title: "Navigation".into(),
                    lines: vec![
                        "Click the arrows or the dots, or press Left/Right.".into(),
                        "Number keys 1-9 jump straight to a slide.".into(),
                        "Tab moves focus between sliders.".into(),
                    ],
                },
                SlideConfig {
                    title: "Events".into(),
                    lines: vec![
                        "Every finished transition publishes slider.slide.end".into(),
                        "on the in-process event bus, exactly once.".into(),
                    ],
                },
                SlideConfig {
                    title: "That's it".into(),
                    lines: vec![
                        "Edit config.toml to define your own sliders.".into(),
                        "Press q to quit.".into(),
                    ],
                },
            ],
        },
        SliderConfig {
            id: "tips".into(),
            start: 0,
            slides: vec![
                SlideConfig {
                    title: "Tip 1".into(),
                    lines: vec!["Arrow keys only drive the focused slider.".into()],
                },
                SlideConfig {
                    title: "Tip 2".into(),
                    lines: vec!["Press d to detach the focused slider.".into()],
                },
                SlideConfig {
                    title: "Tip 3".into(),
                    lines: vec!["Set logging.enabled to record bus events.".into()],
                },
            ],
        },
    ]
}

/// Definition of a single carousel instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Identifier naming the instance; scopes events and logging.
    pub id: String,
    /// Initial slide index, clamped into range at construction.
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub slides: Vec<SlideConfig>,
}

/// Content of one slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideConfig {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// UI appearance and timing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub animations: bool,
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            animations: true,
            animation_ms: default_animation_ms(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Bus event logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// When set, a `tracing` subscriber writes to `crabslide.log` in the
    /// log directory.
    #[serde(default)]
    pub trace: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            trace: false,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate_ms() -> u64 {
    50
}
fn default_animation_ms() -> u64 {
    300
}
fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/crabslide/logs".to_string()
}
