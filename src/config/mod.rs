// SPDX-License-Identifier: MPL-2.0
//! This module handles the front end's configuration, including loading and
//! saving preferences to a `settings.toml` file.
//!
//! Every field has a default, so a partial file only overrides what it names.
//!
//! # Examples
//!
//! ```no_run
//! use green_classify::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.language, Some("fr".to_string()));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{BannerLifetime, VisibilityRatio};
use crate::domain::upload::{ValidationPolicy, IMAGE_MIME_TYPES};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GreenClassify";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub language: Option<String>,
    pub upload: UploadConfig,
    pub notifications: NotificationConfig,
    pub page: PageConfig,
}

/// Upload form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_size_bytes: u64,
    pub allowed_mime_types: Vec<String>,
    pub form_action: String,
    pub field_name: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_mime_types: IMAGE_MIME_TYPES.iter().map(ToString::to_string).collect(),
            form_action: DEFAULT_FORM_ACTION.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }
}

impl UploadConfig {
    /// Builds the guard policy described by these settings.
    #[must_use]
    pub fn policy(&self) -> ValidationPolicy {
        ValidationPolicy::new(self.allowed_mime_types.iter().cloned(), self.max_size_bytes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub lifetime_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            lifetime_ms: DEFAULT_BANNER_LIFETIME_MS,
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn lifetime(&self) -> BannerLifetime {
        BannerLifetime::from_millis(self.lifetime_ms)
    }
}

/// Scroll, visibility and carousel behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub navbar_shadow_threshold_px: f32,
    pub reveal_threshold: f32,
    pub carousel_interval_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_shadow_threshold_px: DEFAULT_NAVBAR_SHADOW_THRESHOLD_PX,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
        }
    }
}

impl PageConfig {
    #[must_use]
    pub fn reveal_threshold(&self) -> VisibilityRatio {
        VisibilityRatio::new(self.reveal_threshold)
    }

    #[must_use]
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms.max(MIN_CAROUSEL_INTERVAL_MS))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        config.upload.max_size_bytes = 2048;
        config.notifications.lifetime_ms = 5_000;
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[upload]\nmax_size_bytes = 1024\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.upload.max_size_bytes, 1024);
        assert_eq!(loaded.upload.field_name, DEFAULT_FIELD_NAME);
        assert_eq!(loaded.page, PageConfig::default());
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn default_upload_config_builds_default_policy() {
        assert_eq!(UploadConfig::default().policy(), ValidationPolicy::default());
    }

    #[test]
    fn carousel_interval_has_a_floor() {
        let page = PageConfig {
            carousel_interval_ms: 0,
            ..PageConfig::default()
        };
        assert_eq!(
            page.carousel_interval(),
            Duration::from_millis(MIN_CAROUSEL_INTERVAL_MS)
        );
    }
}
