//! Physical constants, ratio guards, and default sweep/vehicle values.

/// Gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.81;

/// Density of fresh water in kg/m³.
pub const WATER_DENSITY: f64 = 1000.0;

/// Added to every risk-ratio denominator so a zero friction or weight term
/// still yields a finite ratio.
pub const RATIO_EPSILON: f64 = 1e-9;

/// Display ceiling for the drag/friction ratio.
pub const DRAG_RATIO_CEILING: f64 = 3.0;

/// Display ceiling for the buoyancy/weight ratio.
pub const BUOYANCY_RATIO_CEILING: f64 = 2.0;

// Default sweep ranges (m and m/s), endpoints inclusive.
pub const DEFAULT_HEIGHT_MIN: f64 = 0.01;
pub const DEFAULT_HEIGHT_MAX: f64 = 1.8;
pub const DEFAULT_VELOCITY_MIN: f64 = 0.01;
pub const DEFAULT_VELOCITY_MAX: f64 = 6.0;
pub const DEFAULT_SWEEP_SAMPLES: usize = 200;

// Reference vehicle: a mid-size pickup.
pub const DEFAULT_GROUND_CLEARANCE: f64 = 0.28;
pub const DEFAULT_MASS: f64 = 3000.0;
pub const DEFAULT_LENGTH: f64 = 4.795;
pub const DEFAULT_WIDTH: f64 = 1.855;
pub const DEFAULT_HEIGHT: f64 = 1.835;
pub const DEFAULT_FLOAT_FRACTION: f64 = 1.0;
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 1.0;
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 0.5;

// Reference operating point.
pub const DEFAULT_WATER_HEIGHT: f64 = 0.55;
pub const DEFAULT_WATER_VELOCITY: f64 = 2.0;
