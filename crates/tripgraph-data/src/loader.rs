//! CSV loading for trip records

use std::fs::File;
use std::path::Path;

use tracing::info;
use tripgraph_common::{Result, TripGraphError};

use crate::record::{RawTrip, TripTable};

/// Columns that must be present in the input header
const REQUIRED_COLUMNS: [&str; 4] = ["Date/Time", "Lat", "Lon", "Base"];

/// Load a trip table from a CSV file.
///
/// The file must carry a header row with the `Date/Time`, `Lat`, `Lon` and
/// `Base` columns. Row order in the returned table matches file order.
pub fn load_trips<P: AsRef<Path>>(path: P) -> Result<TripTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        TripGraphError::data_file_with_source(format!("failed to open {}", path.display()), e)
    })?;

    let mut reader = csv::Reader::from_reader(file);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TripGraphError::schema(column));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawTrip>() {
        records.push(row?);
    }

    info!(rows = records.len(), path = %path.display(), "loaded trip records");
    Ok(TripTable::new(records))
}
