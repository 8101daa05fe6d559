//! Trip record loading and calendar feature enrichment

pub mod enricher;
pub mod loader;
pub mod record;

pub use enricher::{enrich, TIMESTAMP_FORMAT};
pub use loader::load_trips;
pub use record::{EnrichedTable, EnrichedTrip, RawTrip, TableSummary, TripTable, WEEKDAY_NAMES};
