//! Configuration management for routechord.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::chord::SelectionMode;
use crate::error::{Error, Result};
use crate::render::palette;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "routechord";

/// Default number of busiest airports to keep.
const DEFAULT_TOP_N: usize = 20;

/// Default output image size in pixels (square).
const DEFAULT_SIZE: u32 = 800;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `ROUTECHORD_`, with `__` between
///    section and key, e.g. `ROUTECHORD_AGGREGATE__TOP_N`)
/// 2. TOML config file at `~/.config/routechord/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset configuration.
    pub dataset: DatasetConfig,
    /// Aggregation configuration.
    pub aggregate: AggregateConfig,
    /// Render configuration.
    pub render: RenderConfig,
}

/// Dataset-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the routes dataset (JSON array of route records).
    /// When unset, the built-in sample dataset is used.
    pub routes_path: Option<PathBuf>,
    /// Path to the airports dataset (JSON array of airport records).
    /// When unset, the built-in sample dataset is used.
    pub airports_path: Option<PathBuf>,
}

/// Aggregation-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateConfig {
    /// Number of busiest airports to keep.
    pub top_n: usize,
    /// How edges are filtered once the busiest nodes are chosen.
    pub selection_mode: SelectionMode,
}

/// Render-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output image size in pixels (the diagram is square).
    pub size: u32,
    /// Named palette for node colors.
    pub cmap: String,
    /// Named palette for edge colors.
    pub edge_cmap: String,
    /// Path to write the rendered output to.
    /// When unset, output goes to stdout.
    pub output_path: Option<PathBuf>,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            selection_mode: SelectionMode::default(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cmap: "category20".to_string(),
            edge_cmap: "category20b".to_string(),
            output_path: None,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `ROUTECHORD_`, `__` between
    ///    section and key)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            // Double underscore separates section from key, so multi-word
            // keys like top_n survive (ROUTECHORD_AGGREGATE__TOP_N).
            .merge(Env::prefixed("ROUTECHORD_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.aggregate.top_n == 0 {
            return Err(Error::ConfigValidation {
                message: "top_n must be greater than 0".to_string(),
            });
        }

        if self.render.size == 0 {
            return Err(Error::ConfigValidation {
                message: "size must be greater than 0".to_string(),
            });
        }

        for name in [&self.render.cmap, &self.render.edge_cmap] {
            if palette::lookup(name).is_none() {
                return Err(Error::ConfigValidation {
                    message: format!(
                        "unknown palette '{name}' (available: {})",
                        palette::names().join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}
