use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::controller::DEFAULT_WHEEL_SETTLE;

/// Window and gesture settings. The view itself is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Quiet period after the last wheel tick before the full render, in ms.
    #[serde(default = "default_wheel_settle_ms")]
    pub wheel_settle_ms: u64,
}

fn default_window_width() -> f32 {
    300.0
}
fn default_window_height() -> f32 {
    200.0
}
fn default_wheel_settle_ms() -> u64 {
    DEFAULT_WHEEL_SETTLE.as_millis() as u64
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            window_width: default_window_width(),
            window_height: default_window_height(),
            wheel_settle_ms: default_wheel_settle_ms(),
        }
    }
}

impl AppPreferences {
    /// Load preferences from next to the executable, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                    Ok(prefs) => {
                        info!("Loaded preferences from {}", path.display());
                        return prefs.sanitized();
                    }
                    Err(e) => {
                        error!("Failed to parse preferences: {e}");
                    }
                },
                Err(e) => {
                    error!("Failed to read preferences file: {e}");
                }
            }
        } else {
            debug!("No preferences file at {}", path.display());
        }
        Self::default()
    }

    /// Persist preferences to disk.
    pub fn save(&self) {
        self.save_to(&config_path());
    }

    fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    pub fn wheel_settle(&self) -> Duration {
        Duration::from_millis(self.wheel_settle_ms)
    }

    /// Replace unusable window sizes with the defaults.
    fn sanitized(mut self) -> Self {
        if !(self.window_width >= 1.0 && self.window_width.is_finite()) {
            self.window_width = default_window_width();
        }
        if !(self.window_height >= 1.0 && self.window_height.is_finite()) {
            self.window_height = default_window_height();
        }
        self
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::exe_directory().join("preferences.json")
}
