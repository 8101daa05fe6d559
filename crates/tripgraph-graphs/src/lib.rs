//! Aggregation views and chart rendering for trip records

pub mod aggregator;
pub mod hexbin;
pub mod hexbin_map;
pub mod hourly_by_weekday;
pub mod journeys_by_hour;
pub mod projection;
pub mod renderer;
pub mod types;

pub use aggregator::{HourlyTotalsView, HourlyWeekdayView, DAYS_PER_WEEK, HOURS_PER_DAY};
pub use hexbin_map::{HexbinMapChart, HEXBIN_GRIDSIZE};
pub use hourly_by_weekday::HourlyByWeekdayChart;
pub use journeys_by_hour::JourneysByHourChart;
pub use projection::MercatorProjection;
pub use renderer::ChartRenderer;
pub use types::{ChartSpec, ColorScheme, FontConfig, MarginConfig, StyleConfig};
