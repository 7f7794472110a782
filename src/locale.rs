//! Localization catalog stored as locale.json in the app data directory

use crate::constants::LOCALE_FILE_NAME;
use crate::error::{HistoryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub lang: String,
    pub messages: HashMap<String, String>,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            messages: HashMap::new(),
        }
    }
}

impl Locale {
    /// Translation for `key`, or the key itself when there is none
    pub fn localize(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json(&s)
    }

    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(LOCALE_FILE_NAME);
        match Self::read(&path) {
            Ok(locale) => {
                debug!(path = %path.display(), lang = %locale.lang, "Locale loaded");
                locale
            }
            Err(HistoryError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No locale file found, using built-in English");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read locale, using built-in English");
                Self::default()
            }
        }
    }
}
