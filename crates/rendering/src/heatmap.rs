//! Pixel buffers for the two risk heatmaps.
//!
//! A `RiskField` is stored with row 0 at the lowest velocity. Images are
//! written top-down, so rows are flipped on the way out: the lowest velocity
//! lands on the bottom pixel row and the plot reads with its origin at the
//! bottom-left corner.

use simulation::OperatingPoint;

use crate::color_ramps::{ratio_to_unit, ColorRamp};

/// An RGBA8 image, rows top-down.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeatmapImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl HeatmapImage {
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA of the pixel at `(x, y)`, with `y` counted from the top.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        let p = &self.rgba[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }
}

/// Colorize a row-major ratio field. `values.len()` should equal
/// `rows * cols`; missing cells are left transparent.
pub fn heatmap_pixels(
    values: &[f64],
    rows: usize,
    cols: usize,
    ramp: &ColorRamp,
    ceiling: f64,
) -> HeatmapImage {
    if rows == 0 || cols == 0 {
        return HeatmapImage::default();
    }

    let mut rgba = vec![0u8; rows * cols * 4];
    for (row, chunk) in values.chunks(cols).take(rows).enumerate() {
        let out_row = rows - 1 - row;
        for (col, &value) in chunk.iter().enumerate() {
            let i = (out_row * cols + col) * 4;
            rgba[i..i + 4].copy_from_slice(&ramp.sample_rgba8(ratio_to_unit(value, ceiling)));
        }
    }

    HeatmapImage {
        width: cols,
        height: rows,
        rgba,
    }
}

/// Where the operating point falls on a heatmap, as fractions of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPlacement {
    /// 0 at the lowest sampled height, 1 at the highest.
    pub x: f32,
    /// 0 at the lowest sampled velocity, 1 at the highest.
    pub y: f32,
    /// False when the point lies outside the sampled extent. `x` and `y`
    /// are clamped to the nearest edge in that case.
    pub inside: bool,
}

impl MarkerPlacement {
    /// Vertical fraction measured from the top, for painters with a
    /// top-left origin.
    pub fn y_from_top(&self) -> f32 {
        1.0 - self.y
    }
}

fn axis_extent(axis: &[f64]) -> Option<(f64, f64)> {
    let first = *axis.first()?;
    Some(
        axis.iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

fn axis_fraction(value: f64, (lo, hi): (f64, f64)) -> (f32, bool) {
    let inside = value >= lo && value <= hi;
    let span = hi - lo;
    if span <= 0.0 {
        return (0.5, inside);
    }
    (((value - lo) / span).clamp(0.0, 1.0) as f32, inside)
}

/// Map an operating point onto the heatmap extent. Returns `None` when
/// either axis is empty.
pub fn marker_fraction(
    heights: &[f64],
    velocities: &[f64],
    point: OperatingPoint,
) -> Option<MarkerPlacement> {
    let (x, x_inside) = axis_fraction(point.water_height, axis_extent(heights)?);
    let (y, y_inside) = axis_fraction(point.water_velocity, axis_extent(velocities)?);
    Some(MarkerPlacement {
        x,
        y,
        inside: x_inside && y_inside,
    })
}

/// Evenly spaced `(ratio, color)` stops for a color legend, from 0 up to
/// the ceiling.
pub fn legend_stops(ramp: &ColorRamp, ceiling: f64, count: usize) -> Vec<(f64, [u8; 4])> {
    match count {
        0 => Vec::new(),
        1 => vec![(0.0, ramp.sample_rgba8(0.0))],
        _ => (0..count)
            .map(|i| {
                let ratio = ceiling * i as f64 / (count - 1) as f64;
                (ratio, ramp.sample_rgba8(ratio_to_unit(ratio, ceiling)))
            })
            .collect(),
    }
}
