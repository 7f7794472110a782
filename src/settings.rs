//! User settings stored as settings.json in the app data directory

use crate::constants::SETTINGS_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // History panel
    pub history_panel_width: f32,
    pub show_detail: bool,
    pub show_timestamp: bool,

    // Session
    pub last_image_name: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            history_panel_width: 280.0,
            show_detail: true,
            show_timestamp: true,
            last_image_name: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Panel width kept within what the layout can show
    pub fn history_panel_width_clamped(&self) -> f32 {
        self.history_panel_width.clamp(200.0, 480.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "show_detail": false }"#).unwrap();
        assert!(!settings.show_detail);
        assert!(settings.show_timestamp);
        assert_eq!(settings.history_panel_width, 280.0);
        assert_eq!(settings.window_x, None);
    }

    #[test]
    fn width_is_clamped() {
        let settings = Settings {
            history_panel_width: 5000.0,
            ..Settings::default()
        };
        assert_eq!(settings.history_panel_width_clamped(), 480.0);
    }
}
