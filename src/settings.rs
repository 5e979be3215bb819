use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PainelError, Result};
use crate::keywords::DEFAULT_KEYWORDS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_top_n() -> usize {
    10
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            top_n: default_top_n(),
            log_level: default_log_level(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("painel")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// Settings from `path`; a missing or unreadable file yields the defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Settings::default();
    };
    serde_json::from_str(&content).unwrap_or_default()
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| PainelError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
