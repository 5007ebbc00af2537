//! Color ramps for the risk heatmaps.
//!
//! Ramps are lookup tables of sRGB control points sampled from the matplotlib
//! originals and interpolated linearly for intermediate values. A risk ratio
//! is mapped onto a ramp by dividing it by its display ceiling.

use bevy::prelude::*;

// ---------------------------------------------------------------------------
// Continuous color ramps
// ---------------------------------------------------------------------------

/// A continuous color ramp defined by evenly-spaced sRGB control points.
/// Interpolates linearly in sRGB space for a given `t` in `[0, 1]`.
pub struct ColorRamp {
    /// Control points as `[r, g, b]` in sRGB, evenly spaced from t=0..1.
    points: &'static [[f32; 3]],
}

impl ColorRamp {
    /// Sample the ramp at parameter `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let n = self.points.len();
        if n == 0 {
            return Color::BLACK;
        }
        if n == 1 {
            let p = self.points[0];
            return Color::srgb(p[0], p[1], p[2]);
        }
        let max_idx = (n - 1) as f32;
        let scaled = t * max_idx;
        let lo = (scaled as usize).min(n - 2);
        let hi = lo + 1;
        let frac = scaled - lo as f32;
        let a = self.points[lo];
        let b = self.points[hi];
        Color::srgb(
            a[0] + (b[0] - a[0]) * frac,
            a[1] + (b[1] - a[1]) * frac,
            a[2] + (b[2] - a[2]) * frac,
        )
    }

    /// Sample the ramp as opaque 8-bit RGBA, ready for a pixel buffer.
    pub fn sample_rgba8(&self, t: f32) -> [u8; 4] {
        self.sample(t).to_srgba().to_u8_array()
    }
}

/// Map a clamped risk ratio onto `[0, 1]` using its display ceiling.
pub fn ratio_to_unit(ratio: f64, ceiling: f64) -> f32 {
    if ceiling <= 0.0 {
        return 0.0;
    }
    (ratio / ceiling).clamp(0.0, 1.0) as f32
}

// ---------------------------------------------------------------------------
// Red-Yellow-Green, reversed (11 control points from matplotlib RdYlGn_r).
// Green = friction holds, red = drag dominates.
// ---------------------------------------------------------------------------
pub static DRAG_RISK: ColorRamp = ColorRamp {
    points: &[
        [0.000, 0.408, 0.216], // 0   - dark green
        [0.102, 0.596, 0.314],
        [0.400, 0.741, 0.388],
        [0.651, 0.851, 0.416],
        [0.851, 0.937, 0.545],
        [1.000, 1.000, 0.749], // 0.5 - pale yellow
        [0.996, 0.878, 0.545],
        [0.992, 0.682, 0.380],
        [0.957, 0.427, 0.263],
        [0.843, 0.188, 0.153],
        [0.647, 0.000, 0.149], // 1   - dark red
    ],
};

// ---------------------------------------------------------------------------
// Blues (9 control points from matplotlib Blues).
// Pale = weight dominates, deep blue = vehicle lifted.
// ---------------------------------------------------------------------------
pub static BUOYANCY_RISK: ColorRamp = ColorRamp {
    points: &[
        [0.969, 0.984, 1.000], // 0   - near white
        [0.871, 0.922, 0.969],
        [0.776, 0.859, 0.937],
        [0.620, 0.792, 0.882],
        [0.420, 0.682, 0.839], // 0.5 - mid blue
        [0.259, 0.573, 0.776],
        [0.129, 0.443, 0.710],
        [0.031, 0.318, 0.612],
        [0.031, 0.188, 0.420], // 1   - navy
    ],
};

// ---------------------------------------------------------------------------
// Viridis (16 control points sampled from matplotlib viridis).
// Colorblind-safe alternative used for both fields.
// ---------------------------------------------------------------------------
pub static VIRIDIS: ColorRamp = ColorRamp {
    points: &[
        [0.267, 0.004, 0.329], // 0   - dark purple
        [0.282, 0.100, 0.421],
        [0.278, 0.185, 0.490],
        [0.254, 0.265, 0.530],
        [0.221, 0.339, 0.549],
        [0.190, 0.407, 0.556],
        [0.164, 0.471, 0.558],
        [0.140, 0.534, 0.555], // ~0.47 - teal
        [0.120, 0.596, 0.544],
        [0.135, 0.659, 0.518],
        [0.208, 0.719, 0.473],
        [0.328, 0.774, 0.407],
        [0.478, 0.821, 0.318],
        [0.647, 0.858, 0.210],
        [0.815, 0.883, 0.110],
        [0.993, 0.906, 0.144], // 1   - bright yellow
    ],
};

/// Which pair of ramps the heatmaps use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeatmapPalette {
    /// Red-yellow-green for drag, blues for buoyancy.
    #[default]
    Classic,
    /// Viridis for both fields.
    Viridis,
}

impl HeatmapPalette {
    pub const ALL: [HeatmapPalette; 2] = [HeatmapPalette::Classic, HeatmapPalette::Viridis];

    pub fn label(self) -> &'static str {
        match self {
            HeatmapPalette::Classic => "Classic",
            HeatmapPalette::Viridis => "Viridis",
        }
    }

    pub fn drag_ramp(self) -> &'static ColorRamp {
        match self {
            HeatmapPalette::Classic => &DRAG_RISK,
            HeatmapPalette::Viridis => &VIRIDIS,
        }
    }

    pub fn buoyancy_ramp(self) -> &'static ColorRamp {
        match self {
            HeatmapPalette::Classic => &BUOYANCY_RISK,
            HeatmapPalette::Viridis => &VIRIDIS,
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
