//! Configuration management for stockplot.
//!
//! Loads configuration from TOML files: where the price CSVs live, donut
//! chart tuning, and the viewer window size.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub donut: DonutConfig,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            donut: DonutConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./stockplot.toml`
    /// 2. `~/.config/stockplot/stockplot.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        // Try current directory first
        if let Ok(config) = Self::load("stockplot.toml") {
            return config;
        }

        // Try user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("stockplot").join("stockplot.toml");
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        // Return defaults
        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path.
    pub fn default_path() -> PathBuf {
        PathBuf::from("stockplot.toml")
    }
}

/// Price-file location configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding one `<SYMBOL>.csv` per symbol.
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

/// Donut chart configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutConfig {
    /// Symbols dropped from the ranking before the top-N cut.
    pub exclude: Vec<String>,
    /// Number of slices kept after the descending sort.
    pub top: usize,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            exclude: vec!["BRK-A".to_string()],
            top: 10,
        }
    }
}

/// Viewer window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 640.0,
        }
    }
}
