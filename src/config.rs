//! App Configuration
//!
//! Optional JSON embedded in the host page:
//! `<script id="far-away-config" type="application/json">{ ... }</script>`.
//! Missing fields fall back to defaults.

use log::LevelFilter;
use serde::Deserialize;

use crate::models::SortBy;

/// Element id of the inline config script
pub const CONFIG_ELEMENT_ID: &str = "far-away-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Heading rendered by the logo
    pub title: String,
    /// Start with the sample passports/socks/charger list
    pub seed_demo_items: bool,
    /// Ask `window.confirm` before clearing the list
    pub confirm_clear: bool,
    pub default_sort: SortBy,
    /// `log` level name: off, error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "🌴 Far Away 💼".to_string(),
            seed_demo_items: false,
            confirm_clear: true,
            default_sort: SortBy::Input,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Read the inline config from the document, or defaults if absent
    pub fn load() -> Result<Self, ConfigError> {
        let text = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match text {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }
}
