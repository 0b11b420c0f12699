//! Error types for editor configuration.
//!
//! The interaction core never fails: out-of-range geometry is clamped and
//! missing pages render nothing. Loading and validating configuration is
//! the only fallible surface.

use thiserror::Error;

/// Errors that can occur while loading editor configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Zoom must be finite and positive
    #[error("Invalid zoom: {0} (must be finite and > 0)")]
    InvalidZoom(f64),

    /// Ruler height must be finite and non-negative
    #[error("Invalid ruler height: {0} (must be finite and >= 0)")]
    InvalidRulerHeight(f64),

    /// Snap threshold must be finite and non-negative
    #[error("Invalid snap threshold: {0} (must be finite and >= 0)")]
    InvalidSnapThreshold(f64),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
