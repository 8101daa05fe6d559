//! Chart rendering trait and shared styling helpers

use std::path::Path;

use plotters::prelude::*;
use tripgraph_common::Result;

use crate::{ChartSpec, ColorScheme};

/// Trait for rendering charts to PNG artifacts
pub trait ChartRenderer {
    /// Render the chart to a file path
    fn render_to_file(&self, spec: &ChartSpec, path: &Path) -> Result<()>;

    /// Get series colors from a color scheme
    fn get_colors(&self, scheme: &ColorScheme) -> Vec<RGBColor> {
        match scheme {
            ColorScheme::Default => vec![
                RGBColor(31, 119, 180),  // Blue
                RGBColor(255, 127, 14),  // Orange
                RGBColor(44, 160, 44),   // Green
                RGBColor(214, 39, 40),   // Red
                RGBColor(148, 103, 189), // Purple
                RGBColor(140, 86, 75),   // Brown
                RGBColor(227, 119, 194), // Pink
                RGBColor(127, 127, 127), // Gray
            ],
            ColorScheme::Custom(colors) => colors
                .iter()
                .map(|color_str| self.parse_color(color_str))
                .collect(),
        }
    }

    /// Parse a color string (hex format) to RGBColor
    fn parse_color(&self, color_str: &str) -> RGBColor {
        if let Some(hex) = color_str.strip_prefix('#') {
            if hex.len() == 6 {
                if let (Ok(r), Ok(g), Ok(b)) = (
                    u8::from_str_radix(&hex[0..2], 16),
                    u8::from_str_radix(&hex[2..4], 16),
                    u8::from_str_radix(&hex[4..6], 16),
                ) {
                    return RGBColor(r, g, b);
                }
            }
        }
        // Default to black if parsing fails
        RGBColor(0, 0, 0)
    }

    /// Get background color from the chart spec
    fn background_color(&self, spec: &ChartSpec) -> RGBColor {
        spec.style
            .background_color
            .as_ref()
            .map(|color| self.parse_color(color))
            .unwrap_or(RGBColor(255, 255, 255))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRenderer;

    impl ChartRenderer for MockRenderer {
        fn render_to_file(&self, _spec: &ChartSpec, _path: &Path) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_color_scheme() {
        let renderer = MockRenderer;
        let colors = renderer.get_colors(&ColorScheme::Default);

        assert!(colors.len() >= 7); // One per weekday series
        assert_eq!(colors[0], RGBColor(31, 119, 180));
    }

    #[test]
    fn test_custom_color_scheme() {
        let renderer = MockRenderer;
        let scheme = ColorScheme::Custom(vec![
            "#FF0000".to_string(),
            "#00FF00".to_string(),
            "#0000FF".to_string(),
        ]);

        let colors = renderer.get_colors(&scheme);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], RGBColor(255, 0, 0));
        assert_eq!(colors[1], RGBColor(0, 255, 0));
        assert_eq!(colors[2], RGBColor(0, 0, 255));
    }

    #[test]
    fn test_color_parsing() {
        let renderer = MockRenderer;

        assert_eq!(renderer.parse_color("#FF0000"), RGBColor(255, 0, 0));
        assert_eq!(renderer.parse_color("#abc123"), RGBColor(171, 193, 35));

        // Invalid colors default to black
        assert_eq!(renderer.parse_color("invalid"), RGBColor(0, 0, 0));
        assert_eq!(renderer.parse_color("#ZZ0000"), RGBColor(0, 0, 0));
    }

    #[test]
    fn test_background_color() {
        let renderer = MockRenderer;
        let mut spec = ChartSpec::default();

        assert_eq!(renderer.background_color(&spec), RGBColor(255, 255, 255));

        spec.style.background_color = Some("#F0F0F0".to_string());
        assert_eq!(renderer.background_color(&spec), RGBColor(240, 240, 240));

        spec.style.background_color = None;
        assert_eq!(renderer.background_color(&spec), RGBColor(255, 255, 255));
    }
}
