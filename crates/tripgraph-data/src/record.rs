//! Trip record types and tables

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Deserialize;

/// Full weekday names indexed by day-of-week number, Monday = 0
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One trip record as it appears in the source CSV
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTrip {
    /// Raw pickup timestamp string in the fixed `MM/DD/YYYY HH:MM:SS` format
    #[serde(rename = "Date/Time")]
    pub pickup_at: String,

    #[serde(rename = "Lat")]
    pub lat: f64,

    #[serde(rename = "Lon")]
    pub lon: f64,

    /// Service base identifier, may be empty
    #[serde(rename = "Base")]
    pub base: String,
}

/// Ordered collection of raw trip records, insertion order = file order
#[derive(Debug, Clone, Default)]
pub struct TripTable {
    records: Vec<RawTrip>,
}

impl TripTable {
    pub fn new(records: Vec<RawTrip>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawTrip> {
        self.records.iter()
    }

    /// (longitude, latitude) pairs in file order
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.records.iter().map(|r| (r.lon, r.lat))
    }
}

/// A trip record with the timestamp parsed and calendar columns derived.
/// All four derived columns are pure functions of `pickup_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTrip {
    pub pickup_at: NaiveDateTime,
    pub lat: f64,
    pub lon: f64,
    pub base: String,
    /// 0-6, Monday = 0
    pub day_of_week_num: u8,
    pub day_of_week_name: &'static str,
    /// 1-31
    pub day_of_month: u8,
    /// 0-23
    pub hour_of_day: u8,
}

impl EnrichedTrip {
    /// Derive the calendar columns from a parsed pickup timestamp.
    pub fn derive(pickup_at: NaiveDateTime, lat: f64, lon: f64, base: String) -> Self {
        let day_of_week_num = pickup_at.weekday().num_days_from_monday() as u8;
        Self {
            pickup_at,
            lat,
            lon,
            base,
            day_of_week_num,
            day_of_week_name: WEEKDAY_NAMES[day_of_week_num as usize],
            day_of_month: pickup_at.day() as u8,
            hour_of_day: pickup_at.hour() as u8,
        }
    }
}

/// Trip table after enrichment, same row order as the source table
#[derive(Debug, Clone, Default)]
pub struct EnrichedTable {
    rows: Vec<EnrichedTrip>,
}

impl EnrichedTable {
    pub fn new(rows: Vec<EnrichedTrip>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedTrip> {
        self.rows.iter()
    }

    /// (longitude, latitude) pairs in row order
    pub fn positions(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows.iter().map(|r| (r.lon, r.lat))
    }

    /// Overview of the table contents
    pub fn summary(&self) -> TableSummary {
        TableSummary {
            rows: self.rows.len(),
            first_pickup: self.rows.iter().map(|r| r.pickup_at).min(),
            last_pickup: self.rows.iter().map(|r| r.pickup_at).max(),
            empty_base_count: self.rows.iter().filter(|r| r.base.is_empty()).count(),
        }
    }
}

/// Row count, time span and base-identifier coverage of an enriched table
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    pub rows: usize,
    pub first_pickup: Option<NaiveDateTime>,
    pub last_pickup: Option<NaiveDateTime>,
    /// Rows whose base identifier is empty; these are excluded from the
    /// hourly journey totals and make that view undercount total trips.
    pub empty_base_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_derive_calendar_columns() {
        // 2014-08-01 was a Friday
        let trip = EnrichedTrip::derive(ts(2014, 8, 1, 0, 3), 40.7293, -73.9920, "B02617".into());

        assert_eq!(trip.hour_of_day, 0);
        assert_eq!(trip.day_of_week_num, 4);
        assert_eq!(trip.day_of_week_name, "Friday");
        assert_eq!(trip.day_of_month, 1);
    }

    #[test]
    fn test_derive_is_pure() {
        let at = ts(2014, 8, 18, 9, 30);
        let a = EnrichedTrip::derive(at, 40.0, -74.0, "B02598".into());
        let b = EnrichedTrip::derive(at, 41.0, -73.0, String::new());

        // Location and base never influence the derived columns
        assert_eq!(a.day_of_week_num, b.day_of_week_num);
        assert_eq!(a.day_of_week_name, b.day_of_week_name);
        assert_eq!(a.day_of_month, b.day_of_month);
        assert_eq!(a.hour_of_day, b.hour_of_day);
    }

    #[test]
    fn test_weekday_names_order() {
        assert_eq!(WEEKDAY_NAMES[0], "Monday");
        assert_eq!(WEEKDAY_NAMES[6], "Sunday");

        // 2014-08-04 was a Monday
        let monday = EnrichedTrip::derive(ts(2014, 8, 4, 12, 0), 40.0, -74.0, "B1".into());
        assert_eq!(monday.day_of_week_num, 0);
        assert_eq!(monday.day_of_week_name, "Monday");
    }

    #[test]
    fn test_summary() {
        let rows = vec![
            EnrichedTrip::derive(ts(2014, 8, 2, 10, 0), 40.7, -74.0, "B02617".into()),
            EnrichedTrip::derive(ts(2014, 8, 1, 9, 0), 40.7, -74.0, String::new()),
            EnrichedTrip::derive(ts(2014, 8, 3, 23, 0), 40.7, -74.0, "B02598".into()),
        ];
        let summary = EnrichedTable::new(rows).summary();

        assert_eq!(summary.rows, 3);
        assert_eq!(summary.first_pickup, Some(ts(2014, 8, 1, 9, 0)));
        assert_eq!(summary.last_pickup, Some(ts(2014, 8, 3, 23, 0)));
        assert_eq!(summary.empty_base_count, 1);
    }

    #[test]
    fn test_summary_empty_table() {
        let summary = EnrichedTable::default().summary();
        assert_eq!(summary.rows, 0);
        assert!(summary.first_pickup.is_none());
        assert!(summary.last_pickup.is_none());
        assert_eq!(summary.empty_base_count, 0);
    }

    #[test]
    fn test_positions_preserve_order() {
        let table = TripTable::new(vec![
            RawTrip {
                pickup_at: "08/01/2014 00:03:00".into(),
                lat: 40.73,
                lon: -73.99,
                base: "B02617".into(),
            },
            RawTrip {
                pickup_at: "08/01/2014 00:09:00".into(),
                lat: 40.75,
                lon: -73.97,
                base: "B02617".into(),
            },
        ]);

        let positions: Vec<_> = table.positions().collect();
        assert_eq!(positions, vec![(-73.99, 40.73), (-73.97, 40.75)]);
    }
}
