use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    gradient::Theme,
    provider::openmeteo::{DEFAULT_FORECAST_URL, DEFAULT_GEOCODING_URL},
};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Base URLs of the two Open-Meteo services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub geocoding_url: String,
    pub forecast_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocoding_url: DEFAULT_GEOCODING_URL.to_string(),
            forecast_url: DEFAULT_FORECAST_URL.to_string(),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Unit selection is not stored here; it lasts for one session only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Light or dark background gradients.
    pub theme: Theme,

    pub request_timeout_secs: u64,

    /// Example TOML:
    /// [endpoints]
    /// geocoding_url = "https://geocoding-api.open-meteo.com"
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_open_meteo() {
        let cfg = Config::default();

        assert_eq!(cfg.theme, Theme::Light);
        assert_eq!(cfg.endpoints.geocoding_url, "https://geocoding-api.open-meteo.com");
        assert_eq!(cfg.endpoints.forecast_url, "https://api.open-meteo.com");
        assert_eq!(cfg.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = Config::from_toml("").expect("empty toml is valid");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = Config::from_toml(
            r#"
            theme = "dark"

            [endpoints]
            forecast_url = "http://localhost:8080"
            "#,
        )
        .expect("parse");

        assert!(cfg.theme.is_dark());
        assert_eq!(cfg.endpoints.forecast_url, "http://localhost:8080");
        assert_eq!(cfg.endpoints.geocoding_url, DEFAULT_GEOCODING_URL);
        assert_eq!(cfg.request_timeout_secs, 10);
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Config { theme: Theme::Dark, request_timeout_secs: 3, ..Config::default() };

        let text = cfg.to_toml().expect("serialize");
        assert_eq!(Config::from_toml(&text).expect("parse"), cfg);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Config::from_toml(r#"theme = "sepia""#).is_err());
    }

    #[test]
    fn zero_timeout_is_clamped() {
        let cfg = Config { request_timeout_secs: 0, ..Config::default() };
        assert_eq!(cfg.request_timeout(), Duration::from_secs(1));
    }
}
