// config.rs

//! User-tunable appearance settings, read from a JSON file.
//!
//! Every struct carries `#[serde(default)]`, so a file only needs the keys
//! it wants to change.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config JSON")]
    Json(#[source] serde_json::Error),
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Anything smaller makes the board grow past what can be allocated.
pub const MIN_CELL_SIZE: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colors: ColorScheme,
    /// Side of one board cell in points. A character cell is half as wide.
    pub cell_size: f32,
    pub window: WindowConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: ColorScheme::default(),
            cell_size: 16.0,
            window: WindowConfig::default(),
        }
    }
}

/// RGB triples for the three cell styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub live: [u8; 3],
    pub dead: [u8; 3],
    pub cursor: [u8; 3],
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            live: [200, 0, 0],
            dead: [0, 160, 0],
            cursor: [0, 0, 200],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 800.0, height: 950.0 }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cell_size.is_finite() || self.cell_size < MIN_CELL_SIZE {
            return Err(ConfigError::Invalid {
                field: "cell_size",
                reason: format!("{} is not a number >= {MIN_CELL_SIZE}", self.cell_size),
            });
        }
        for (field, value) in [("window.width", self.window.width), ("window.height", self.window.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { field, reason: format!("{value} is not a positive size") });
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.validate()?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
