//! Configuration file support for devradar.
//!
//! Provides YAML-based configuration through `devradar.config.yml` files,
//! the resolved settings a session runs with, and validation of both.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::network::parse_server_url;
use crate::application::dto::OutputFormat;
use crate::application::factories::{DEFAULT_MAP_HEIGHT, DEFAULT_MAP_WIDTH};
use crate::radar::domain::Coordinate;
use crate::radar::policies::StalePolicy;
use crate::shared::security::{validate_config_file, validate_filter_text};
use crate::shared::{RadarError, Result};

pub const CONFIG_FILENAME: &str = "devradar.config.yml";

/// Server used when neither the CLI nor the config file names one
pub const DEFAULT_SERVER: &str = "http://localhost:3333";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Largest accepted map grid side, in characters
pub const MAX_MAP_DIMENSION: usize = 400;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub techs: Option<String>,
    pub follow: Option<bool>,
    pub format: Option<String>,
    pub stale: Option<String>,
    pub timeout_secs: Option<u64>,
    pub map_width: Option<usize>,
    pub map_height: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Everything a radar session needs, after defaults, file and flags are merged
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSettings {
    pub server: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub techs: String,
    pub follow: bool,
    pub format: OutputFormat,
    pub stale: StalePolicy,
    pub timeout_secs: u64,
    pub map_width: usize,
    pub map_height: usize,
}

impl Default for RadarSettings {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            latitude: None,
            longitude: None,
            techs: String::new(),
            follow: true,
            format: OutputFormat::Text,
            stale: StalePolicy::Discard,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
        }
    }
}

impl RadarSettings {
    /// Overlays values present in a config file
    ///
    /// # Errors
    /// Returns an error if `format` or `stale` hold unknown values
    pub fn apply_file(&mut self, config: &ConfigFile, path: &Path) -> Result<()> {
        if let Some(server) = &config.server {
            self.server = server.clone();
        }
        if config.latitude.is_some() {
            self.latitude = config.latitude;
        }
        if config.longitude.is_some() {
            self.longitude = config.longitude;
        }
        if let Some(techs) = &config.techs {
            self.techs = techs.clone();
        }
        if let Some(follow) = config.follow {
            self.follow = follow;
        }
        if let Some(format) = &config.format {
            self.format = format
                .parse()
                .map_err(|e: String| config_error(path, e, "Use 'text' or 'json'"))?;
        }
        if let Some(stale) = &config.stale {
            self.stale = stale
                .parse()
                .map_err(|e: String| config_error(path, e, "Use 'discard' or 'apply'"))?;
        }
        if let Some(timeout) = config.timeout_secs {
            self.timeout_secs = timeout;
        }
        if let Some(width) = config.map_width {
            self.map_width = width;
        }
        if let Some(height) = config.map_height {
            self.map_height = height;
        }
        Ok(())
    }

    /// Checks the merged settings before anything connects
    pub fn validate(&self) -> Result<()> {
        parse_server_url(&self.server)?;

        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => {
                Coordinate::new(lat, lon)?;
            }
            (None, None) => {}
            _ => {
                return Err(RadarError::Validation {
                    message: "latitude and longitude must be given together".to_string(),
                }
                .into())
            }
        }

        validate_filter_text(&self.techs)?;

        if self.timeout_secs == 0 || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(RadarError::Validation {
                message: format!(
                    "timeout must be between 1 and {} seconds, got {}",
                    MAX_TIMEOUT_SECS, self.timeout_secs
                ),
            }
            .into());
        }

        for (name, value) in [("width", self.map_width), ("height", self.map_height)] {
            if value == 0 || value > MAX_MAP_DIMENSION {
                return Err(RadarError::Validation {
                    message: format!(
                        "map {} must be between 1 and {}, got {}",
                        name, MAX_MAP_DIMENSION, value
                    ),
                }
                .into());
            }
        }

        Ok(())
    }
}

fn config_error(path: &Path, details: impl Into<String>, hint: &str) -> anyhow::Error {
    RadarError::ConfigError {
        path: path.to_path_buf(),
        details: details.into(),
        hint: hint.to_string(),
    }
    .into()
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_config_file(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<(PathBuf, ConfigFile)>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some((config_path, config)))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(lat) = config.latitude {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(config_error(
                path,
                format!("latitude {} is out of range", lat),
                "Use a value between -90 and 90",
            ));
        }
    }
    if let Some(lon) = config.longitude {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(config_error(
                path,
                format!("longitude {} is out of range", lon),
                "Use a value between -180 and 180",
            ));
        }
    }
    if config.latitude.is_some() != config.longitude.is_some() {
        return Err(config_error(
            path,
            "only one of latitude/longitude is set",
            "Set both latitude and longitude, or neither",
        ));
    }
    if let Some(server) = &config.server {
        if server.trim().is_empty() {
            return Err(config_error(
                path,
                "server must not be empty",
                "Use a URL such as http://localhost:3333",
            ));
        }
    }
    if config.timeout_secs == Some(0) {
        return Err(config_error(
            path,
            "timeout_secs must be greater than zero",
            "Use a timeout such as 10",
        ));
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
