//! Calendar feature enrichment for trip tables

use chrono::NaiveDateTime;
use tracing::debug;
use tripgraph_common::{Result, TripGraphError};

use crate::record::{EnrichedTable, EnrichedTrip, TripTable};

/// Fixed input format for pickup timestamps
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Parse every pickup timestamp and append the four derived calendar
/// columns, producing an enriched table in the same row order.
///
/// Any row whose timestamp does not match [`TIMESTAMP_FORMAT`] aborts the
/// whole operation with a `Timestamp` error naming the offending data row
/// (1-based); rows are never dropped or nulled.
pub fn enrich(table: TripTable) -> Result<EnrichedTable> {
    let mut rows = Vec::with_capacity(table.len());

    for (index, raw) in table.iter().enumerate() {
        let pickup_at = NaiveDateTime::parse_from_str(&raw.pickup_at, TIMESTAMP_FORMAT)
            .map_err(|_| TripGraphError::timestamp(index + 1, &raw.pickup_at, TIMESTAMP_FORMAT))?;
        rows.push(EnrichedTrip::derive(
            pickup_at,
            raw.lat,
            raw.lon,
            raw.base.clone(),
        ));
    }

    debug!(rows = rows.len(), "enriched trip table");
    Ok(EnrichedTable::new(rows))
}
