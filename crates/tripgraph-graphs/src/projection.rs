//! Mercator projection anchored at a bounding rectangle

use std::f64::consts::FRAC_PI_4;

use tripgraph_common::MapBounds;

/// Spherical Mercator projection clipped to a bounding rectangle.
///
/// Projected coordinates are in radians on the unit sphere, with the
/// south-west corner of the rectangle at the origin. Points outside the
/// rectangle are rejected by [`MercatorProjection::project`].
#[derive(Debug, Clone, Copy)]
pub struct MercatorProjection {
    bounds: MapBounds,
    y_south: f64,
}

impl MercatorProjection {
    pub fn new(bounds: MapBounds) -> Self {
        Self {
            bounds,
            y_south: mercator_y(bounds.south),
        }
    }

    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    /// Project a (longitude, latitude) pair, or None when the point lies
    /// outside the bounding rectangle.
    pub fn project(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !self.bounds.contains(lon, lat) {
            return None;
        }
        Some((
            (lon - self.bounds.west).to_radians(),
            mercator_y(lat) - self.y_south,
        ))
    }

    /// Projected width of the rectangle
    pub fn width(&self) -> f64 {
        (self.bounds.east - self.bounds.west).to_radians()
    }

    /// Projected height of the rectangle
    pub fn height(&self) -> f64 {
        mercator_y(self.bounds.north) - self.y_south
    }
}

/// Mercator y for a latitude in degrees
fn mercator_y(lat: f64) -> f64 {
    (lat.to_radians() / 2.0 + FRAC_PI_4).tan().ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nyc() -> MercatorProjection {
        MercatorProjection::new(MapBounds::new(-74.26, 40.50, -73.70, 40.92).unwrap())
    }

    #[test]
    fn test_corners_map_to_plot_corners() {
        let proj = nyc();

        let (x, y) = proj.project(-74.26, 40.50).unwrap();
        assert!(x.abs() < 1e-12);
        assert!(y.abs() < 1e-12);

        let (x, y) = proj.project(-73.70, 40.92).unwrap();
        assert!((x - proj.width()).abs() < 1e-12);
        assert!((y - proj.height()).abs() < 1e-12);
    }

    #[test]
    fn test_projection_is_monotonic() {
        let proj = nyc();

        let (x1, y1) = proj.project(-74.1, 40.6).unwrap();
        let (x2, y2) = proj.project(-73.9, 40.8).unwrap();
        assert!(x2 > x1);
        assert!(y2 > y1);
    }

    #[test]
    fn test_points_outside_bounds_are_clipped() {
        let proj = nyc();

        assert!(proj.project(-75.0, 40.7).is_none());
        assert!(proj.project(-74.0, 41.5).is_none());
        assert!(proj.project(0.0, 0.0).is_none());
    }

    #[test]
    fn test_extent_is_positive() {
        let proj = nyc();
        assert!(proj.width() > 0.0);
        assert!(proj.height() > 0.0);
    }

    #[test]
    fn test_latitude_stretch_increases_with_latitude() {
        // Mercator stretches the vertical axis away from the equator
        let low = MercatorProjection::new(MapBounds::new(-1.0, 0.0, 1.0, 1.0).unwrap());
        let high = MercatorProjection::new(MapBounds::new(-1.0, 60.0, 1.0, 61.0).unwrap());
        assert!(high.height() > low.height());
    }
}
