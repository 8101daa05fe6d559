//! The batch pipeline: load, enrich, render the three chart artifacts

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use tripgraph_common::Result;
use tripgraph_config::Config;
use tripgraph_data::{enrich, load_trips};
use tripgraph_graphs::{
    ChartRenderer, ChartSpec, HexbinMapChart, HourlyByWeekdayChart, JourneysByHourChart,
};

/// Row count and artifact paths produced by one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    pub rows: usize,
    pub hourly_by_weekday: PathBuf,
    pub journeys_by_hour: PathBuf,
    pub hexbin_map: PathBuf,
}

/// Run the whole batch: load the trip CSV, enrich it with calendar
/// features, then render the three charts into the configured directory.
pub fn run_pipeline(config: &Config) -> Result<PipelineReport> {
    let bounds = config.map.bounds()?;

    let table = load_trips(&config.data.file)?;
    let enriched = enrich(table)?;

    let summary = enriched.summary();
    info!(rows = summary.rows, "trip table ready");
    if let (Some(first), Some(last)) = (summary.first_pickup, summary.last_pickup) {
        info!(%first, %last, "pickup time span");
    }
    if summary.empty_base_count > 0 {
        warn!(
            rows = summary.empty_base_count,
            "rows without a base identifier"
        );
    }

    let out_dir = Path::new(&config.chart.output_dir);
    fs::create_dir_all(out_dir)?;

    let hourly_by_weekday = out_dir.join("hourly_by_weekday.png");
    HourlyByWeekdayChart::from_table(&enriched).render_to_file(
        &styled(HourlyByWeekdayChart::default_spec(), config),
        &hourly_by_weekday,
    )?;

    let journeys_by_hour = out_dir.join("journeys_by_hour.png");
    JourneysByHourChart::from_table(&enriched).render_to_file(
        &styled(JourneysByHourChart::default_spec(), config),
        &journeys_by_hour,
    )?;

    let hexbin_map = out_dir.join("hexbin_map.png");
    HexbinMapChart::from_enriched(&enriched, bounds).render_to_file(
        &styled(HexbinMapChart::default_spec(), config),
        &hexbin_map,
    )?;

    Ok(PipelineReport {
        rows: summary.rows,
        hourly_by_weekday,
        journeys_by_hour,
        hexbin_map,
    })
}

/// Apply the configured chart style on top of a chart's own spec
fn styled(mut spec: ChartSpec, config: &Config) -> ChartSpec {
    spec.style.background_color = Some(config.chart.background_color.clone());
    spec.style.title_font.family = config.chart.font_family.clone();
    spec.style.label_font.family = config.chart.font_family.clone();
    spec.style.label_font.size = config.chart.font_size;
    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_applies_chart_config() {
        let mut config = Config::default();
        config.chart.background_color = "#101010".to_string();
        config.chart.font_family = "Arial".to_string();
        config.chart.font_size = 18;

        let spec = styled(HourlyByWeekdayChart::default_spec(), &config);

        assert_eq!(spec.style.background_color.as_deref(), Some("#101010"));
        assert_eq!(spec.style.title_font.family, "Arial");
        assert_eq!(spec.style.label_font.size, 18);
        // The chart's own captions and canvas are untouched
        assert_eq!(spec.title, "Hourly Uber Pickups by Day of the Week");
        assert_eq!(spec.width, 1200);
    }
}
