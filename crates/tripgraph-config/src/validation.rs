//! Validation utilities and regex patterns

use std::sync::LazyLock;

use regex::Regex;
use tripgraph_common::MapBounds;
use validator::ValidationError;

use crate::settings::MapConfig;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #FF0000)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Validate a log level string
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate the map bounds rectangle as a whole
pub fn validate_map_bounds(config: &MapConfig) -> Result<(), ValidationError> {
    match MapBounds::new(config.west, config.south, config.east, config.north) {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("invalid_map_bounds")),
    }
}
