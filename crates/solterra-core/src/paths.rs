//! Filesystem paths for configuration, preferences, and logs

use std::path::PathBuf;

use crate::constants;

/// Root config directory (~/.solterra)
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(constants::ui::CONFIG_DIR_NAME)
}

/// Log file directory
pub fn logs_dir() -> PathBuf {
    config_dir().join("logs")
}

/// Preferences file (language, last view)
pub fn preferences_path() -> PathBuf {
    config_dir().join("preferences.json")
}

/// Stored user profile from the external auth provider
pub fn profile_path() -> PathBuf {
    config_dir().join("profile.json")
}

/// Site configuration file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}
