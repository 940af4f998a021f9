use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Pastebin server; pastes are POSTed to its root
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Path on the server under which syntax modules are published
    #[serde(default = "default_mode_asset_path")]
    pub mode_asset_path: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Minimum gap between two accepted submissions
    #[serde(default = "default_submit_interval_ms")]
    pub submit_interval_ms: u64,

    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,

    #[serde(default = "default_word_wrap")]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_server_url() -> String {
    "http://localhost:9900".to_string()
}

fn default_mode_asset_path() -> String {
    "/assets/syntax".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_submit_interval_ms() -> u64 {
    1000
}

fn default_line_numbers() -> bool {
    true
}

fn default_word_wrap() -> bool {
    true
}

fn default_font_size() -> u32 {
    14
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            mode_asset_path: default_mode_asset_path(),
            request_timeout_secs: default_request_timeout_secs(),
            submit_interval_ms: default_submit_interval_ms(),
            line_numbers_enabled: default_line_numbers(),
            word_wrap_enabled: default_word_wrap(),
            font_size: default_font_size(),
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(path) {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Check the values a user may have hand-edited
    pub fn validate(&self) -> Result<(), AppError> {
        let url = url::Url::parse(&self.server_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Settings(format!(
                "server_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if !self.mode_asset_path.starts_with('/') {
            return Err(AppError::Settings(
                "mode_asset_path must start with '/'".to_string(),
            ));
        }
        Ok(())
    }

    /// URL of the syntax module `module` on the asset host
    pub fn module_url(&self, module: &str) -> String {
        format!(
            "{}{}/{}.sublime-syntax",
            self.server_url.trim_end_matches('/'),
            self.mode_asset_path.trim_end_matches('/'),
            module
        )
    }

    /// URL pastes are POSTed to
    pub fn submit_url(&self) -> String {
        format!("{}/", self.server_url.trim_end_matches('/'))
    }

    /// Get config directory (cross-platform)
    pub fn config_dir() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("pastepad");
        path
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.server_url, "http://localhost:9900");
        assert_eq!(settings.submit_interval_ms, 1000);
        assert_eq!(settings.request_timeout_secs, 10);
        assert!(settings.line_numbers_enabled);
        assert!(settings.word_wrap_enabled);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_config() {
        // Simulate an old config missing newer fields
        let json = r#"{"server_url": "https://paste.example.org"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.server_url, "https://paste.example.org");
        assert_eq!(settings.mode_asset_path, "/assets/syntax");
        assert_eq!(settings.font_size, 14);
    }

    #[test]
    fn test_urls() {
        let settings = AppSettings {
            server_url: "https://paste.example.org/".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.submit_url(), "https://paste.example.org/");
        assert_eq!(
            settings.module_url("python"),
            "https://paste.example.org/assets/syntax/python.sublime-syntax"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = AppSettings {
            server_url: "ftp://paste.example.org".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(AppError::Settings(_))));

        let settings = AppSettings {
            server_url: "nope".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(AppError::Url(_))));

        let settings = AppSettings {
            mode_asset_path: "assets".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            submit_interval_ms: 2500,
            word_wrap_enabled: false,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }
}
