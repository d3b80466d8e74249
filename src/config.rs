// config.rs - Selector Settings
//
// Settings are read once at startup from a JSON file in the platform config
// directory. Missing fields fall back to defaults; the file is never written.
// Loading happens before the logger exists, so nothing here logs.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSettings {
    /// Side of the square hit area around each resize grip
    pub grip_size: f64,
    /// Initial region side relative to the monitor under the cursor
    pub initial_scale: f64,
    /// env_logger filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            grip_size: constants::selector::GRIP_SIZE,
            initial_scale: constants::selector::INITIAL_SCALE,
            log_filter: constants::logging::DEFAULT_FILTER.to_string(),
        }
    }
}

impl SelectorSettings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(constants::config::DIR_NAME)
            .join(constants::config::FILE_NAME)
    }

    /// Load from the default location. A missing file yields defaults, an
    /// unreadable or malformed one is an error.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path())
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        Ok(settings.sanitized())
    }

    /// Replace out-of-range values with their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.initial_scale > 0.0 && self.initial_scale <= 1.0) {
            self.initial_scale = defaults.initial_scale;
        }
        if !(self.grip_size.is_finite() && self.grip_size >= 0.0) {
            self.grip_size = defaults.grip_size;
        }
        if self.log_filter.trim().is_empty() {
            self.log_filter = defaults.log_filter;
        }
        self
    }
}
