//! Site configuration
//!
//! API base URL and brand settings, read from config.toml in the config
//! directory with an environment override for the API base.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::paths;

/// Default content API base when nothing is configured
pub const DEFAULT_API_BASE: &str = "https://api.solterra.travel/v1";

/// Environment variable overriding the content API base
pub const API_BASE_ENV: &str = "SOLTERRA_API_BASE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL of the content API
    pub api_base: String,
    /// Brand title shown in the nav bar
    pub brand_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            brand_title: constants::ui::DEFAULT_BRAND_TITLE.to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration, falling back to defaults when the file is
    /// missing or unreadable
    pub fn load() -> Self {
        let path = paths::config_file_path();
        let mut config = if path.exists() {
            match std::fs::read_to_string(&path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(config) => config,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to parse config.toml, using defaults");
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read config.toml, using defaults");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.is_empty() {
                config.api_base = base;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SiteConfig = toml::from_str("api_base = \"http://localhost:4000\"").unwrap();
        assert_eq!(config.api_base, "http://localhost:4000");
        assert_eq!(config.brand_title, constants::ui::DEFAULT_BRAND_TITLE);
    }

    #[test]
    fn test_default_roundtrip() {
        let config = SiteConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let restored: SiteConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(restored.api_base, DEFAULT_API_BASE);
    }
}
