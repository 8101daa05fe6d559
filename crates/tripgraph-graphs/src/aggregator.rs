//! Aggregate views computed from an enriched trip table

use tripgraph_data::EnrichedTable;

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

/// Pickup counts keyed by (hour of day, weekday). Every cell of the 24x7
/// grid exists even when its count is zero; computed fresh per render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyWeekdayView {
    counts: [[u64; DAYS_PER_WEEK]; HOURS_PER_DAY],
}

impl HourlyWeekdayView {
    /// Count records per (hour, weekday) cell.
    pub fn from_table(table: &EnrichedTable) -> Self {
        let mut counts = [[0u64; DAYS_PER_WEEK]; HOURS_PER_DAY];
        for row in table.iter() {
            counts[row.hour_of_day as usize][row.day_of_week_num as usize] += 1;
        }
        Self { counts }
    }

    /// Count for one cell; hour 0-23, weekday 0-6 (Monday = 0)
    pub fn count(&self, hour: u8, weekday: u8) -> u64 {
        self.counts[hour as usize][weekday as usize]
    }

    /// Per-hour counts for one weekday series, ordered 0-23
    pub fn weekday_series(&self, weekday: u8) -> impl Iterator<Item = (u8, u64)> + '_ {
        (0..HOURS_PER_DAY as u8).map(move |hour| (hour, self.count(hour, weekday)))
    }

    /// Total count across all cells
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Largest cell count, for y-axis scaling
    pub fn max_count(&self) -> u64 {
        self.counts.iter().flatten().copied().max().unwrap_or(0)
    }
}

impl Default for HourlyWeekdayView {
    fn default() -> Self {
        Self {
            counts: [[0; DAYS_PER_WEEK]; HOURS_PER_DAY],
        }
    }
}

/// Journey counts per hour of day, counting only records with a non-empty
/// base identifier. All 24 slots exist even when zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourlyTotalsView {
    counts: [u64; HOURS_PER_DAY],
}

impl HourlyTotalsView {
    /// Count records with a non-empty base identifier per hour.
    pub fn from_table(table: &EnrichedTable) -> Self {
        let mut counts = [0u64; HOURS_PER_DAY];
        for row in table.iter() {
            if !row.base.is_empty() {
                counts[row.hour_of_day as usize] += 1;
            }
        }
        Self { counts }
    }

    /// Count for one hour, 0-23
    pub fn count(&self, hour: u8) -> u64 {
        self.counts[hour as usize]
    }

    /// Total count across all hours
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest hourly count, for y-axis scaling
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

impl Default for HourlyTotalsView {
    fn default() -> Self {
        Self {
            counts: [0; HOURS_PER_DAY],
        }
    }
}
