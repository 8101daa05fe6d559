//! Chart specification and styling types

use serde::{Deserialize, Serialize};

/// Specification of a single chart artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub width: u32,
    pub height: u32,
    pub style: StyleConfig,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: "Chart".to_string(),
            x_label: None,
            y_label: None,
            width: 800,
            height: 600,
            style: StyleConfig::default(),
        }
    }
}

/// Color scheme for chart series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ColorScheme {
    Default,
    Custom(Vec<String>),
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 14,
        }
    }
}

/// Margin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top: 20,
            right: 20,
            bottom: 50,
            left: 70,
        }
    }
}

/// Styling configuration shared by all chart types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    pub color_scheme: ColorScheme,
    pub background_color: Option<String>,
    pub title_font: FontConfig,
    pub label_font: FontConfig,
    pub margins: MarginConfig,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Default,
            background_color: Some("#FFFFFF".to_string()),
            title_font: FontConfig {
                family: "sans-serif".to_string(),
                size: 22,
            },
            label_font: FontConfig::default(),
            margins: MarginConfig::default(),
        }
    }
}
