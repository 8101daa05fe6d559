//! Configuration loading utilities

use std::env;
use std::path::Path;

use thiserror::Error;
use tracing::debug;
use tripgraph_common::Result as TripGraphResult;
use validator::Validate;

use crate::Config;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for tripgraph_common::TripGraphError {
    fn from(err: ConfigError) -> Self {
        tripgraph_common::TripGraphError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from the default locations, falling back to defaults
    pub fn load() -> TripGraphResult<Config> {
        let config = if let Ok(config_path) = env::var("TRIPGRAPH_CONFIG_PATH") {
            debug!(path = %config_path, "loading configuration from TRIPGRAPH_CONFIG_PATH");
            Self::load_config(&config_path)?
        } else if Path::new("tripgraph.yaml").exists() {
            Self::load_config("tripgraph.yaml")?
        } else if Path::new("tripgraph.yml").exists() {
            Self::load_config("tripgraph.yml")?
        } else {
            debug!("no configuration file found, using defaults with env overrides");
            let mut config = Config::default();
            Self::apply_env_overrides(&mut config)?;
            config.validate().map_err(ConfigError::ValidationError)?;
            config
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TripGraphResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(file) = env::var("TRIPGRAPH_DATA_FILE") {
            config.data.file = file;
        }

        if let Ok(west) = env::var("MAP_WEST") {
            config.map.west = west.parse().map_err(|e| ConfigError::EnvParseError {
                var: "MAP_WEST".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(south) = env::var("MAP_SOUTH") {
            config.map.south = south.parse().map_err(|e| ConfigError::EnvParseError {
                var: "MAP_SOUTH".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(east) = env::var("MAP_EAST") {
            config.map.east = east.parse().map_err(|e| ConfigError::EnvParseError {
                var: "MAP_EAST".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(north) = env::var("MAP_NORTH") {
            config.map.north = north.parse().map_err(|e| ConfigError::EnvParseError {
                var: "MAP_NORTH".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(dir) = env::var("CHART_OUTPUT_DIR") {
            config.chart.output_dir = dir;
        }

        if let Ok(color) = env::var("CHART_BACKGROUND_COLOR") {
            config.chart.background_color = color;
        }

        if let Ok(family) = env::var("CHART_FONT_FAMILY") {
            config.chart.font_family = family;
        }

        if let Ok(size) = env::var("CHART_FONT_SIZE") {
            config.chart.font_size = size.parse().map_err(|e| ConfigError::EnvParseError {
                var: "CHART_FONT_SIZE".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(file) = env::var("LOG_FILE") {
            config.logging.file = Some(file);
        }

        if let Ok(colored) = env::var("LOG_COLORED") {
            config.logging.colored = colored.parse().map_err(|e| ConfigError::EnvParseError {
                var: "LOG_COLORED".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}
