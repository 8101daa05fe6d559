//! Common utilities and types shared across the tripgraph workspace

pub mod error;
pub mod logging;
pub mod types;

pub use error::{Result, TripGraphError};
pub use types::MapBounds;
