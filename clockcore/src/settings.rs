//! Clock face settings and their on-disk storage
//!
//! The settings dialog edits a copy of [`ClockSettings`] and swaps it in
//! wholesale. The value is saved as pretty JSON in the platform config dir.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ClockError, Result};

/// What the clock face draws and how generated times are rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockSettings {
    pub show_hour_marks: bool,
    pub show_minute_marks: bool,
    /// Draw every Nth hour numeral. 0 hides the ring.
    pub hours_text_interval: u32,
    /// Minute numeral step. Only multiples of 5 are drawn. 0 hides the ring.
    pub minutes_text_interval: u32,
    /// Minute granularity of generated times (> 0)
    pub round_minutes_to_nearest: u32,
    #[serde(default)]
    pub show_second_hand: bool,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            show_hour_marks: true,
            show_minute_marks: true,
            hours_text_interval: 1,
            minutes_text_interval: 5,
            round_minutes_to_nearest: 5,
            show_second_hand: false,
        }
    }
}

/// One entry of a settings dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalOption {
    pub label: &'static str,
    pub value: u32,
}

const fn option(label: &'static str, value: u32) -> IntervalOption {
    IntervalOption { label, value }
}

pub const MINUTE_TEXT_INTERVALS: &[IntervalOption] = &[
    option("none", 0),
    option("every 5 min", 5),
    option("every 15 min", 15),
    option("every 30 min", 30),
];

pub const HOUR_TEXT_INTERVALS: &[IntervalOption] = &[
    option("none", 0),
    option("every hour", 1),
    option("every 3 hours", 3),
    option("every 6 hours", 6),
];

pub const ROUNDING_PRECISIONS: &[IntervalOption] = &[
    option("1", 1),
    option("5", 5),
    option("15", 15),
    option("30", 30),
];

/// Label of `value` in `options`, or the bare number for custom values.
pub fn option_label(options: &[IntervalOption], value: u32) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.to_string())
        .unwrap_or_else(|| value.to_string())
}

impl ClockSettings {
    /// Swap in `other`, returning the previous settings.
    pub fn replace(&mut self, other: ClockSettings) -> ClockSettings {
        std::mem::replace(self, other)
    }

    pub fn validate(&self) -> Result<()> {
        if self.round_minutes_to_nearest == 0 {
            return Err(ClockError::InvalidPrecision(0));
        }
        Ok(())
    }

    /// `settings.json` inside the clockQuiz config dir.
    pub fn config_path() -> PathBuf {
        config_dir("clockquiz").join("settings.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let settings: ClockSettings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from `path`, falling back to defaults.
    ///
    /// A missing file is normal on first launch; anything else is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(ClockError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Get the config directory for Slow Computer apps
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("co", "slowcomputer", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
