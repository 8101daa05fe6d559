//! Hexagonal binning of projected points and the density color ramp

use std::collections::HashMap;

use plotters::style::RGBColor;

/// ColorBrewer Yellow-Orange-Red ramp, light to dark
const YLORRD_STOPS: [(u8, u8, u8); 9] = [
    (255, 255, 204),
    (255, 237, 160),
    (254, 217, 118),
    (254, 178, 76),
    (253, 141, 60),
    (252, 78, 42),
    (227, 26, 28),
    (189, 0, 38),
    (128, 0, 38),
];

/// Sample the reversed Yellow-Orange-Red ramp at t in [0, 1]:
/// t = 0 is the darkest red, t = 1 the lightest yellow.
pub fn ylorrd_reversed(t: f64) -> RGBColor {
    sample_ramp(1.0 - t.clamp(0.0, 1.0))
}

fn sample_ramp(t: f64) -> RGBColor {
    let segments = (YLORRD_STOPS.len() - 1) as f64;
    let scaled = t.clamp(0.0, 1.0) * segments;
    let index = (scaled.floor() as usize).min(YLORRD_STOPS.len() - 2);
    let frac = scaled - index as f64;

    let (r0, g0, b0) = YLORRD_STOPS[index];
    let (r1, g1, b1) = YLORRD_STOPS[index + 1];
    RGBColor(
        lerp(r0, r1, frac),
        lerp(g0, g1, frac),
        lerp(b0, b1, frac),
    )
}

fn lerp(a: u8, b: u8, t: f64) -> u8 {
    (a as f64 + (b as f64 - a as f64) * t).round() as u8
}

/// One occupied hexagonal cell
#[derive(Debug, Clone, PartialEq)]
pub struct HexBin {
    pub center: (f64, f64),
    pub count: u64,
}

/// Bins points from a `[0, width] x [0, height]` extent into a pointy-top
/// hexagonal grid with a fixed number of hexagons along the dominant axis.
///
/// Cell centers form two staggered rectangular lattices (offset by half a
/// cell in both directions); each point joins the nearer center.
#[derive(Debug, Clone, Copy)]
pub struct HexBinner {
    sx: f64,
    sy: f64,
}

impl HexBinner {
    pub fn new(width: f64, height: f64, gridsize: usize) -> Self {
        let gridsize = gridsize.max(1) as f64;
        // Regular hexagons: vertical lattice spacing is sqrt(3) times the
        // horizontal spacing
        let (sx, sy) = if width >= height {
            let sx = width / gridsize;
            (sx, sx * 3f64.sqrt())
        } else {
            let sy = height / gridsize;
            (sy / 3f64.sqrt(), sy)
        };
        Self { sx, sy }
    }

    /// Horizontal center spacing (hexagon width)
    pub fn cell_width(&self) -> f64 {
        self.sx
    }

    /// Assign every point to its hexagonal cell and count per cell.
    /// Only occupied cells are returned; the point count is conserved.
    pub fn bin<I>(&self, points: I) -> Vec<HexBin>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut counts: HashMap<(i64, i64, bool), u64> = HashMap::new();

        for (x, y) in points {
            let px = x / self.sx;
            let py = y / self.sy;

            // Candidate centers on the aligned and the staggered lattice;
            // vertical distance is weighted for the hexagonal aspect
            let i1 = px.round();
            let j1 = py.round();
            let i2 = (px - 0.5).round();
            let j2 = (py - 0.5).round();

            let d1 = (px - i1).powi(2) + 3.0 * (py - j1).powi(2);
            let d2 = (px - i2 - 0.5).powi(2) + 3.0 * (py - j2 - 0.5).powi(2);

            let key = if d1 <= d2 {
                (i1 as i64, j1 as i64, false)
            } else {
                (i2 as i64, j2 as i64, true)
            };
            *counts.entry(key).or_insert(0) += 1;
        }

        let mut bins: Vec<HexBin> = counts
            .into_iter()
            .map(|((i, j, staggered), count)| HexBin {
                center: self.center(i, j, staggered),
                count,
            })
            .collect();
        // Deterministic draw order
        bins.sort_by(|a, b| {
            a.center
                .partial_cmp(&b.center)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        bins
    }

    fn center(&self, i: i64, j: i64, staggered: bool) -> (f64, f64) {
        let offset = if staggered { 0.5 } else { 0.0 };
        (
            (i as f64 + offset) * self.sx,
            (j as f64 + offset) * self.sy,
        )
    }

    /// Corner coordinates of the pointy-top hexagon around a center
    pub fn vertices(&self, center: (f64, f64)) -> [(f64, f64); 6] {
        let (cx, cy) = center;
        let half_w = self.sx / 2.0;
        let r = self.sy / 3.0;
        [
            (cx, cy + r),
            (cx + half_w, cy + r / 2.0),
            (cx + half_w, cy - r / 2.0),
            (cx, cy - r),
            (cx - half_w, cy - r / 2.0),
            (cx - half_w, cy + r / 2.0),
        ]
    }
}
