use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::DEFAULT_DATE_FORMAT;

pub const APP_DIR_NAME: &str = "monthcal";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub date_format: String,
    pub show_hints: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            show_hints: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::from)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        Self::load_or_create_at(&Self::config_path())
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.logging
            .directory
            .clone()
            .unwrap_or_else(Self::config_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_default_theme() {
        let config = Config::default();
        assert_eq!(config.ui.theme, "default");
        assert!(config.ui.show_hints);
    }

    #[test]
    fn default_date_format_matches_editor_display() {
        let config = Config::default();
        assert_eq!(config.ui.date_format, "%B %-d, %Y");
    }

    #[test]
    fn default_log_level_is_info() {
        assert_eq!(Config::default().logging.level, "info");
    }

    #[test]
    fn parse_valid_toml_config() {
        let toml_content = r#"
            [ui]
            theme = "nord"
            date_format = "%d/%m/%Y"
            show_hints = false

            [logging]
            level = "debug"
            directory = "/tmp/monthcal-logs"
        "#;

        let config = Config::from_toml(toml_content).unwrap();

        assert_eq!(config.ui.theme, "nord");
        assert_eq!(config.ui.date_format, "%d/%m/%Y");
        assert!(!config.ui.show_hints);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/monthcal-logs"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = Config::from_toml("[ui]\ntheme = \"gruvbox\"\n").unwrap();

        assert_eq!(config.ui.theme, "gruvbox");
        assert_eq!(config.ui.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn empty_file_is_default_config() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn parse_invalid_toml_returns_error() {
        let result = Config::from_toml("this is not valid toml");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn load_or_create_writes_defaults_then_reads_them_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let created = Config::load_or_create_at(&path).unwrap();
        assert!(path.exists());

        let loaded = Config::load_or_create_at(&path).unwrap();
        assert_eq!(created, loaded);
    }

    #[test]
    fn saved_changes_are_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        config.ui.theme = "dracula".to_string();

        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap().ui.theme, "dracula");
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }
}
