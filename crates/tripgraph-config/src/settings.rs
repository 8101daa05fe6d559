//! Application configuration structures

use serde::{Deserialize, Serialize};
use tripgraph_common::MapBounds;
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct Config {
    /// Trip data source configuration
    #[validate]
    pub data: DataConfig,

    /// Map bounds for the geographic density chart
    #[validate]
    pub map: MapConfig,

    /// Chart rendering settings
    #[validate]
    pub chart: ChartConfig,

    /// Logging configuration
    #[validate]
    pub logging: LoggingConfig,
}

/// Trip data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the input CSV file of trip records
    #[validate(length(min = 1, message = "Data file path cannot be empty"))]
    pub file: String,
}

/// Bounding rectangle for the geographic density chart (WGS84 degrees)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "crate::validation::validate_map_bounds"))]
pub struct MapConfig {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl MapConfig {
    /// The validated bounding rectangle
    pub fn bounds(&self) -> tripgraph_common::Result<MapBounds> {
        MapBounds::new(self.west, self.south, self.east, self.north)
    }
}

/// Chart rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ChartConfig {
    /// Directory where rendered PNG artifacts are written
    #[validate(length(min = 1, message = "Output directory cannot be empty"))]
    pub output_dir: String,

    /// Background color (hex format)
    #[validate(regex(
        path = "crate::validation::HEX_COLOR_REGEX",
        message = "Background color must be a valid hex color"
    ))]
    pub background_color: String,

    /// Font family for titles and labels
    pub font_family: String,

    /// Font size for axis labels
    #[validate(range(min = 8, max = 72, message = "Font size must be between 8 and 72"))]
    pub font_size: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(custom = "crate::validation::validate_log_level")]
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,

    /// Whether to use colored console output
    pub colored: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: "uber-raw-data-aug14.csv".to_string(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        // New York City rectangle
        Self {
            west: -74.26,
            south: 40.50,
            east: -73.70,
            north: 40.92,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            output_dir: "charts".to_string(),
            background_color: "#FFFFFF".to_string(),
            font_family: "sans-serif".to_string(),
            font_size: 14,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            colored: true,
        }
    }
}
