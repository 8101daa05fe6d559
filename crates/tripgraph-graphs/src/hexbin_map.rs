//! Geographic hexbin density map

use std::path::Path;

use plotters::prelude::*;
use tracing::{debug, info, warn};
use tripgraph_common::{MapBounds, Result};
use tripgraph_data::{EnrichedTable, TripTable};

use crate::hexbin::{ylorrd_reversed, HexBinner};
use crate::projection::MercatorProjection;
use crate::renderer::ChartRenderer;
use crate::types::ChartSpec;

/// Number of hexagons along the dominant projected axis
pub const HEXBIN_GRIDSIZE: usize = 1000;

/// Density map of pickup locations: Mercator-projected points binned into
/// a hexagonal grid, colored on a logarithmic scale.
#[derive(Debug)]
pub struct HexbinMapChart {
    /// Raw (longitude, latitude) pairs; projection clips to the bounds
    points: Vec<(f64, f64)>,
    projection: MercatorProjection,
}

impl HexbinMapChart {
    pub fn new<I>(positions: I, bounds: MapBounds) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            points: positions.into_iter().collect(),
            projection: MercatorProjection::new(bounds),
        }
    }

    /// Enrichment is not required for the density map; only locations are.
    pub fn from_table(table: &TripTable, bounds: MapBounds) -> Self {
        Self::new(table.positions(), bounds)
    }

    pub fn from_enriched(table: &EnrichedTable, bounds: MapBounds) -> Self {
        Self::new(table.positions(), bounds)
    }

    /// Canvas and captions for this chart
    pub fn default_spec() -> ChartSpec {
        ChartSpec {
            title: "NYC uber pickups Hexbin Map".to_string(),
            x_label: Some("Longitude".to_string()),
            y_label: Some("Latitude".to_string()),
            width: 1400,
            height: 1000,
            ..ChartSpec::default()
        }
    }

    /// Points projected into map coordinates, excluding points outside the
    /// bounding rectangle
    fn projected_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .filter_map(|&(lon, lat)| self.projection.project(lon, lat))
            .collect()
    }
}

impl ChartRenderer for HexbinMapChart {
    fn render_to_file(&self, spec: &ChartSpec, path: &Path) -> Result<()> {
        let projected = self.projected_points();
        let clipped = self.points.len() - projected.len();
        if clipped > 0 {
            debug!(clipped, "points outside the map bounds were dropped");
        }
        if projected.is_empty() {
            warn!("no records within the map bounds, rendering an empty map");
        }

        let binner = HexBinner::new(
            self.projection.width(),
            self.projection.height(),
            HEXBIN_GRIDSIZE,
        );
        let bins = binner.bin(projected);
        let max_count = bins.iter().map(|b| b.count).max().unwrap_or(0);

        let root = BitMapBackend::new(path, (spec.width, spec.height)).into_drawing_area();
        let bg_color = self.background_color(spec);
        root.fill(&bg_color)?;

        let title_font = (
            spec.style.title_font.family.as_str(),
            spec.style.title_font.size as i32,
        );
        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, title_font)
            .margin(spec.style.margins.top as i32)
            .x_label_area_size(spec.style.margins.bottom as i32)
            .y_label_area_size(spec.style.margins.left as i32)
            .build_cartesian_2d(0.0..self.projection.width(), 0.0..self.projection.height())?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_desc(spec.x_label.as_deref().unwrap_or(""))
            .y_desc(spec.y_label.as_deref().unwrap_or(""))
            .draw()?;

        // Logarithmic color scale over the reversed Yellow-Orange-Red ramp
        for bin in &bins {
            let t = if max_count <= 1 {
                1.0
            } else {
                (bin.count as f64).ln() / (max_count as f64).ln()
            };
            let color = ylorrd_reversed(t);
            chart.draw_series(std::iter::once(Polygon::new(
                binner.vertices(bin.center).to_vec(),
                color.filled(),
            )))?;
        }

        root.present()?;
        info!(
            bins = bins.len(),
            "rendered hexbin density map to {}",
            path.display()
        );
        Ok(())
    }
}
