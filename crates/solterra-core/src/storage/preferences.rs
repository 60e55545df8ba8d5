//! Preference storage
//!
//! Persists the selected language and last view in
//! ~/.solterra/preferences.json. Writes are atomic (temp file + rename) so
//! a crash mid-save never leaves a truncated file behind.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Active UI language, read once at startup
    pub language: Language,
    /// View restored on next launch
    pub last_view: Option<String>,
}

impl Preferences {
    /// Load preferences, falling back to defaults when missing or unreadable
    pub fn load() -> Self {
        Self::load_from(&paths::preferences_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to parse preferences, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read preferences, using defaults");
                Self::default()
            }
        }
    }

    /// Save preferences atomically
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::preferences_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let temp_path = path.with_extension("tmp");
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }
}
