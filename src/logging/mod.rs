//! Bus event logging to disk.
//!
//! When enabled, appends every published bus event to a daily log file in
//! the configured log directory (default: `~/.local/share/crabslide/logs/`).
//! Files are named `events_<date>.log`.

use crate::bus::BusMessage;
use crate::config::model::LoggingConfig;
use anyhow::Result;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Writes published bus events to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created —
/// logging never takes down the UI.
pub struct EventLogger {
    enabled: bool,
    log_dir: String,
    file_handles: HashMap<String, fs::File>,
}

impl EventLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            file_handles: HashMap::new(),
        }
    }

    /// Append one published event. No-op if logging is disabled.
    pub fn log_event(&mut self, msg: &BusMessage, timestamp_format: &str) {
        if !self.enabled {
            return;
        }

        let timestamp = chrono::Local::now().format(timestamp_format).to_string();
        let line = format!(
            "[{}] {} slider={} slide={}",
            timestamp, msg.topic, msg.slider_id, msg.slide_index
        );

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("events_{}.log", date);
        let log_dir = expand_log_dir(&self.log_dir);
        let filepath = log_dir.join(&filename);

        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a handle that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}

/// Install a `tracing` subscriber writing to `crabslide.log` in the log
/// directory. No-op unless `logging.trace` is set; stdout is owned by the
/// terminal UI.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.trace {
        return Ok(());
    }
    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("crabslide.log"))?;
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(std::sync::Arc::new(file))
        .init();
    Ok(())
}

fn expand_log_dir(log_dir: &str) -> PathBuf {
    if log_dir.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(log_dir.trim_start_matches("~/"));
        }
    }
    PathBuf::from(log_dir)
}
