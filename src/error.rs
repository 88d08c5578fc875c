//! Error types for settings loading.
//!
//! The simulation itself is total; only reading and validating a settings
//! bundle can fail.

use std::fmt;

/// Errors that can occur while loading or validating [`Settings`](crate::Settings).
#[derive(Debug)]
pub enum SettingsError {
    /// Failed to read the settings file.
    Io(std::io::Error),
    /// The settings file is not valid JSON for the settings schema.
    Parse(serde_json::Error),
    /// `circle_colors` has no entries.
    EmptyPalette,
    /// A min/max pair is inverted, or a spread value is negative.
    InvalidRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    /// `arc_resolution` must be at least one sample.
    ZeroArcResolution,
    /// `frame_rate` must be positive.
    ZeroFrameRate,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Failed to read settings file: {}", e),
            SettingsError::Parse(e) => write!(f, "Failed to parse settings: {}", e),
            SettingsError::EmptyPalette => write!(f, "circle_colors must contain at least one color"),
            SettingsError::InvalidRange { name, min, max } => {
                write!(f, "Invalid range for {}: min {} > max {}", name, min, max)
            }
            SettingsError::ZeroArcResolution => write!(f, "arc_resolution must be at least 1"),
            SettingsError::ZeroFrameRate => write!(f, "frame_rate must be at least 1"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
