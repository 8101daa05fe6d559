//! Configuration management for the tripgraph pipeline

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{ChartConfig, Config, DataConfig, LoggingConfig, MapConfig};
