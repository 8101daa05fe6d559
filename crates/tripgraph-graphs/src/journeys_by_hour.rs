//! Journeys-by-hour bar chart

use std::path::Path;

use plotters::prelude::*;
use tracing::{info, warn};
use tripgraph_common::Result;
use tripgraph_data::EnrichedTable;

use crate::aggregator::{HourlyTotalsView, HOURS_PER_DAY};
use crate::renderer::ChartRenderer;
use crate::types::ChartSpec;

/// Bar chart of journey counts per hour of day, 0-23 ascending.
///
/// Counts cover records with a non-empty base identifier only, so the view
/// undercounts total trips whenever base identifiers are missing; the
/// renderer flags that instead of reconciling it.
#[derive(Debug)]
pub struct JourneysByHourChart {
    view: HourlyTotalsView,
    /// Rows excluded from the counts because their base identifier is empty
    excluded_rows: usize,
}

impl JourneysByHourChart {
    pub fn new(view: HourlyTotalsView, excluded_rows: usize) -> Self {
        Self {
            view,
            excluded_rows,
        }
    }

    pub fn from_table(table: &EnrichedTable) -> Self {
        Self::new(
            HourlyTotalsView::from_table(table),
            table.summary().empty_base_count,
        )
    }

    /// Canvas and captions for this chart
    pub fn default_spec() -> ChartSpec {
        ChartSpec {
            title: "Journeys by Hour".to_string(),
            x_label: None,
            y_label: Some("Total Journeys".to_string()),
            width: 800,
            height: 600,
            ..ChartSpec::default()
        }
    }

    pub fn view(&self) -> &HourlyTotalsView {
        &self.view
    }

    fn y_max(&self) -> f64 {
        let max = self.view.max_count();
        if max == 0 {
            10.0
        } else {
            max as f64 * 1.1
        }
    }
}

impl ChartRenderer for JourneysByHourChart {
    fn render_to_file(&self, spec: &ChartSpec, path: &Path) -> Result<()> {
        if self.view.total() == 0 {
            warn!("no records for the journeys chart, rendering an empty grid");
        }
        if self.excluded_rows > 0 {
            warn!(
                excluded = self.excluded_rows,
                "rows without a base identifier are excluded, journey totals undercount trips"
            );
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
            .build_cartesian_2d(-0.6f64..23.6f64, 0.0..self.y_max())?;

        chart
            .configure_mesh()
            .x_desc(spec.x_label.as_deref().unwrap_or(""))
            .y_desc(spec.y_label.as_deref().unwrap_or(""))
            .x_labels(HOURS_PER_DAY)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .draw()?;

        let colors = self.get_colors(&spec.style.color_scheme);
        let bar_color = colors[0];

        // One bar per hour, with a small gap between bars
        for hour in 0..HOURS_PER_DAY as u8 {
            let count = self.view.count(hour) as f64;
            let x = hour as f64;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x - 0.4, 0.0), (x + 0.4, count)],
                bar_color.filled(),
            )))?;
        }

        root.present()?;
        info!("rendered journeys chart to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;
    use tripgraph_data::EnrichedTrip;

    fn trip(h: u32, base: &str) -> EnrichedTrip {
        let at = NaiveDate::from_ymd_opt(2014, 8, 1)
            .unwrap()
            .and_hms_opt(h, 30, 0)
            .unwrap();
        EnrichedTrip::derive(at, 40.7, -74.0, base.to_string())
    }

    #[test]
    fn test_default_spec() {
        let spec = JourneysByHourChart::default_spec();
        assert_eq!(spec.title, "Journeys by Hour");
        assert_eq!(spec.y_label.as_deref(), Some("Total Journeys"));
        assert_eq!(spec.width, 800);
        assert_eq!(spec.height, 600);
    }

    #[test]
    fn test_from_table_counts_and_exclusions() {
        let table = EnrichedTable::new(vec![
            trip(9, "B02617"),
            trip(9, "B02598"),
            trip(17, "B02617"),
            trip(17, ""),
        ]);
        let chart = JourneysByHourChart::from_table(&table);

        assert_eq!(chart.view().count(9), 2);
        assert_eq!(chart.view().count(17), 1);
        assert_eq!(chart.excluded_rows, 1);
    }

    #[test]
    fn test_totals_match_row_count_without_empty_bases() {
        let table = EnrichedTable::new(vec![trip(3, "B1"), trip(12, "B2"), trip(23, "B3")]);
        let chart = JourneysByHourChart::from_table(&table);

        assert_eq!(chart.view().total(), table.len() as u64);
        assert_eq!(chart.excluded_rows, 0);
    }

    #[test]
    fn test_render_to_file() {
        let table = EnrichedTable::new(vec![
            trip(0, "B1"),
            trip(8, "B1"),
            trip(8, "B2"),
            trip(18, "B1"),
        ]);
        let chart = JourneysByHourChart::from_table(&table);
        let spec = JourneysByHourChart::default_spec();

        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("journeys_by_hour.png");

        chart
            .render_to_file(&spec, &file_path)
            .expect("render should succeed");
        assert!(file_path.exists());
        assert!(file_path.metadata().unwrap().len() > 0);
    }

    #[test]
    fn test_render_empty_table_produces_placeholder() {
        let chart = JourneysByHourChart::from_table(&EnrichedTable::default());
        let spec = JourneysByHourChart::default_spec();

        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("empty_bars.png");

        chart
            .render_to_file(&spec, &file_path)
            .expect("empty input must still render");
        assert!(file_path.exists());
    }
}
