//! Configuration management for the `SkyWatch` application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::SkyWatchError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `SkyWatch` application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SkyWatchConfig {
    /// Backend API configuration
    #[serde(default)]
    pub backend: BackendConfig,
    /// Forecast page configuration
    #[serde(default)]
    pub forecast: ForecastConfig,
    /// Storm map configuration
    #[serde(default)]
    pub map: MapConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the weather backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Forecast page settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Province shown when no position is available
    #[serde(default = "default_province")]
    pub default_province: String,
}

/// Storm map settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial center latitude
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    /// Initial center longitude
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,
    /// Initial zoom level
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Basemap tile URL template
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    /// Basemap attribution text
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_province() -> String {
    "Hà Nội".to_string()
}

fn default_center_lat() -> f64 {
    15.0
}

fn default_center_lon() -> f64 {
    115.0
}

fn default_zoom() -> u8 {
    5
}

fn default_tile_url() -> String {
    "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png".to_string()
}

fn default_attribution() -> String {
    "© OpenStreetMap © CARTO".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_province: default_province(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl SkyWatchConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with SKYWATCH_ prefix
        builder = builder.add_source(
            Environment::with_prefix("SKYWATCH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: SkyWatchConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skywatch").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if !self.backend.base_url.starts_with("http://")
            && !self.backend.base_url.starts_with("https://")
        {
            return Err(SkyWatchError::config(
                "Backend base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        if self.backend.timeout_seconds == 0 || self.backend.timeout_seconds > 300 {
            return Err(
                SkyWatchError::config("Backend timeout must be between 1 and 300 seconds").into(),
            );
        }

        if self.forecast.default_province.is_empty() {
            return Err(SkyWatchError::config("Default province cannot be empty").into());
        }

        if self.map.zoom > 19 {
            return Err(SkyWatchError::config("Map zoom cannot exceed 19").into());
        }

        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(SkyWatchError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
