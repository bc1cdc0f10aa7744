//! Presentation settings
//!
//! Window and HUD preferences loaded from a JSON file next to the binary.
//! Gameplay numbers are deliberately not configurable; the simulation stays
//! constant-driven so sessions are reproducible.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default settings file, overridable via `PINFALL_SETTINGS`
const SETTINGS_FILE: &str = "pinfall.json";

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window size in pixels
    pub window_width: i32,
    pub window_height: i32,
    /// Show the frame-time readout under the HUD
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1600,
            window_height: 1000,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when the file is missing or
    /// malformed
    pub fn load() -> Self {
        let path = std::env::var("PINFALL_SETTINGS").unwrap_or_else(|_| SETTINGS_FILE.to_string());
        match Self::read_file(Path::new(&path)) {
            Ok(settings) => {
                log::info!("loaded settings from {path}");
                settings
            }
            Err(err) => {
                log::warn!("settings from {path} unavailable ({err}), using defaults");
                Self::default()
            }
        }
    }

    fn read_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
