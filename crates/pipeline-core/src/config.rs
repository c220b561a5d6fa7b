use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{PipelineError, PipelineResult};

/// Minimum pointer travel before a press becomes a drag.
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_activation_distance")]
    pub activation_distance: f64,
    #[serde(default = "default_column_width")]
    pub column_width: f64,
    #[serde(default = "default_card_height")]
    pub card_height: f64,
    #[serde(default = "default_gap")]
    pub gap: f64,
}

fn default_activation_distance() -> f64 {
    DEFAULT_ACTIVATION_DISTANCE
}

fn default_column_width() -> f64 {
    280.0
}

fn default_card_height() -> f64 {
    96.0
}

fn default_gap() -> f64 {
    16.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            activation_distance: default_activation_distance(),
            column_width: default_column_width(),
            card_height: default_card_height(),
            gap: default_gap(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/pipeline/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("pipeline/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("pipeline\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Loads an explicitly named config file. Unlike [`AppConfig::load`],
    /// a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> PipelineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| PipelineError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(PipelineError::Config(
                "activation_distance must be a non-negative number".to_string(),
            ));
        }
        for (name, value) in [
            ("column_width", self.column_width),
            ("card_height", self.card_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PipelineError::Config(format!("{} must be positive", name)));
            }
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(PipelineError::Config("gap must be non-negative".to_string()));
        }
        Ok(())
    }
}
