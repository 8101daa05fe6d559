//! Shared geographic types used across the tripgraph workspace

use serde::{Deserialize, Serialize};

use crate::error::{Result, TripGraphError};

/// Latitudes beyond this cannot be projected with a Mercator projection
pub const MERCATOR_MAX_LAT: f64 = 85.05113;

/// A bounding rectangle in WGS84 degrees, supplied by the caller to
/// configure the map projection. Never derived from the data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl MapBounds {
    /// Build a validated bounding rectangle.
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Result<Self> {
        let bounds = Self {
            west,
            south,
            east,
            north,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check the rectangle invariants: east > west, north > south,
    /// longitudes within [-180, 180], latitudes within the Mercator-safe range.
    pub fn validate(&self) -> Result<()> {
        if !(-180.0..=180.0).contains(&self.west) || !(-180.0..=180.0).contains(&self.east) {
            return Err(TripGraphError::validation_field(
                "longitudes must lie within [-180, 180]",
                "west/east",
            ));
        }
        if self.south.abs() >= MERCATOR_MAX_LAT || self.north.abs() >= MERCATOR_MAX_LAT {
            return Err(TripGraphError::validation_field(
                "latitudes must lie within the Mercator-safe range",
                "south/north",
            ));
        }
        if self.east <= self.west {
            return Err(TripGraphError::validation_field(
                "east boundary must exceed west boundary",
                "east",
            ));
        }
        if self.north <= self.south {
            return Err(TripGraphError::validation_field(
                "north boundary must exceed south boundary",
                "north",
            ));
        }
        Ok(())
    }

    /// Whether a (longitude, latitude) pair falls inside the rectangle.
    pub fn contains(&self, lon: f64, lat: f64) -> bool {
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }
}
