//! Hourly pickups line chart, one series per weekday

use std::path::Path;

use plotters::prelude::*;
use tracing::{info, warn};
use tripgraph_common::Result;
use tripgraph_data::{EnrichedTable, WEEKDAY_NAMES};

use crate::aggregator::{HourlyWeekdayView, DAYS_PER_WEEK};
use crate::renderer::ChartRenderer;
use crate::types::ChartSpec;

/// Multi-line chart of pickup counts by hour of day, one line per weekday
#[derive(Debug)]
pub struct HourlyByWeekdayChart {
    view: HourlyWeekdayView,
}

impl HourlyByWeekdayChart {
    pub fn new(view: HourlyWeekdayView) -> Self {
        Self { view }
    }

    pub fn from_table(table: &EnrichedTable) -> Self {
        Self::new(HourlyWeekdayView::from_table(table))
    }

    /// Canvas and captions for this chart
    pub fn default_spec() -> ChartSpec {
        ChartSpec {
            title: "Hourly Uber Pickups by Day of the Week".to_string(),
            x_label: Some("Hour of the Day".to_string()),
            y_label: Some("Number of Pickups".to_string()),
            width: 1200,
            height: 800,
            ..ChartSpec::default()
        }
    }

    pub fn view(&self) -> &HourlyWeekdayView {
        &self.view
    }

    /// Y-axis upper bound with headroom above the largest cell
    fn y_max(&self) -> f64 {
        let max = self.view.max_count();
        if max == 0 {
            10.0
        } else {
            max as f64 * 1.1
        }
    }
}

impl ChartRenderer for HourlyByWeekdayChart {
    fn render_to_file(&self, spec: &ChartSpec, path: &Path) -> Result<()> {
        if self.view.total() == 0 {
            warn!("no records for the hourly pickups chart, rendering an empty grid");
        }

        let root = BitMapBackend::new(path, (spec.width, spec.height)).into_drawing_area();
        let bg_color = self.background_color(spec);
        root.fill(&bg_color)?;

        let title_font = (
            spec.style.title_font.family.as_str(),
            spec.style.title_font.size as i32,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, title_font)
            .margin(spec.style.margins.top as i32)
            .x_label_area_size(spec.style.margins.bottom as i32)
            .y_label_area_size(spec.style.margins.left as i32)
            .build_cartesian_2d(0i32..23i32, 0.0..self.y_max())?;

        chart
            .configure_mesh()
            .x_desc(spec.x_label.as_deref().unwrap_or(""))
            .y_desc(spec.y_label.as_deref().unwrap_or(""))
            .x_labels(24)
            .draw()?;

        let colors = self.get_colors(&spec.style.color_scheme);

        // One line per weekday, Monday first
        for weekday in 0..DAYS_PER_WEEK {
            let color = colors[weekday % colors.len()];
            let series: Vec<(i32, f64)> = self
                .view
                .weekday_series(weekday as u8)
                .map(|(hour, count)| (hour as i32, count as f64))
                .collect();

            chart
                .draw_series(LineSeries::new(series, color.stroke_width(2)))?
                .label(WEEKDAY_NAMES[weekday])
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 12, y)], color.stroke_width(2))
                });
        }

        chart.configure_series_labels().draw()?;

        root.present()?;
        info!("rendered hourly pickups chart to {}", path.display());
        Ok(())
    }
}
