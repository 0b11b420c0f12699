//! Editor configuration.
//!
//! Stored as JSON. Every field is optional in the file and falls back to the
//! defaults in `constants`.

use crate::constants::{DEFAULT_SNAP_THRESHOLD, DEFAULT_ZOOM, RESIZE_DEBOUNCE_MS, RULER_HEIGHT};
use crate::error::{ConfigError, ConfigResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Screen pixels per document unit before responsive scaling
    pub zoom: f64,
    /// Ruler thickness in pixels
    pub ruler_height: f64,
    /// Quiet window for window-resize handling
    pub resize_debounce_ms: u64,
    /// Snap distance in screen pixels; 0 disables snapping
    pub snap_threshold: f64,
    /// Also snap element centers to guides
    pub snap_center: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            ruler_height: RULER_HEIGHT,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            snap_center: true,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `path` if it exists, otherwise use the defaults. A file that
    /// exists but cannot be parsed is an error.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No editor config, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load(path)
            .with_context(|| format!("Failed to load editor config from {}", path.display()))?;
        info!(path = %path.display(), "Editor config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigError::InvalidZoom(self.zoom));
        }
        if !(self.ruler_height.is_finite() && self.ruler_height >= 0.0) {
            return Err(ConfigError::InvalidRulerHeight(self.ruler_height));
        }
        if !(self.snap_threshold.is_finite() && self.snap_threshold >= 0.0) {
            return Err(ConfigError::InvalidSnapThreshold(self.snap_threshold));
        }
        Ok(())
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }
}

/// Platform config location, e.g. `~/.config/layout-canvas/editor.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("layout-canvas").join("editor.json"))
}
