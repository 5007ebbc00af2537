//! Vehicle and operating-point records consumed by the risk model.
//!
//! [`VehicleSpec`] is the raw record coming from an input surface (sliders,
//! JSON). [`VehicleParams`] is the validated, immutable form the model works
//! with; it can only be obtained through [`VehicleParams::new`] (or
//! `TryFrom<VehicleSpec>`, which deserialization goes through), so every
//! instance satisfies the physical domain checks.

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_DRAG_COEFFICIENT, DEFAULT_FLOAT_FRACTION, DEFAULT_FRICTION_COEFFICIENT,
    DEFAULT_GROUND_CLEARANCE, DEFAULT_HEIGHT, DEFAULT_LENGTH, DEFAULT_MASS, DEFAULT_WATER_HEIGHT,
    DEFAULT_WATER_VELOCITY, DEFAULT_WIDTH, GRAVITY,
};
use crate::risk_error::ConfigurationError;

// =============================================================================
// Raw input record
// =============================================================================

/// Unvalidated vehicle parameters as entered by a user or read from JSON.
///
/// Missing JSON fields fall back to the reference vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleSpec {
    /// Height below which no part of the body is submerged (m).
    pub ground_clearance: f64,
    /// Curb mass (kg).
    pub mass: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Fraction of full Archimedes buoyancy the body realizes (0..=1).
    pub float_fraction: f64,
    pub drag_coefficient: f64,
    pub friction_coefficient: f64,
}

impl Default for VehicleSpec {
    fn default() -> Self {
        Self {
            ground_clearance: DEFAULT_GROUND_CLEARANCE,
            mass: DEFAULT_MASS,
            length: DEFAULT_LENGTH,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            float_fraction: DEFAULT_FLOAT_FRACTION,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
        }
    }
}

// =============================================================================
// Validated parameters
// =============================================================================

/// Validated vehicle parameters plus the quantities derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VehicleSpec", into = "VehicleSpec")]
pub struct VehicleParams {
    spec: VehicleSpec,
    base_area: f64,
    weight: f64,
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError {
            field,
            value,
            requirement: "> 0",
        })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError {
            field,
            value,
            requirement: ">= 0",
        })
    }
}

fn require_unit_interval(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError {
            field,
            value,
            requirement: "within [0, 1]",
        })
    }
}

impl VehicleParams {
    /// Validate a raw record and precompute the footprint area and weight.
    pub fn new(spec: VehicleSpec) -> Result<Self, ConfigurationError> {
        require_non_negative("ground_clearance", spec.ground_clearance)?;
        require_positive("mass", spec.mass)?;
        require_positive("length", spec.length)?;
        require_positive("width", spec.width)?;
        require_positive("height", spec.height)?;
        require_unit_interval("float_fraction", spec.float_fraction)?;
        require_positive("drag_coefficient", spec.drag_coefficient)?;
        require_non_negative("friction_coefficient", spec.friction_coefficient)?;

        Ok(Self {
            spec,
            base_area: spec.length * spec.width,
            weight: spec.mass * GRAVITY,
        })
    }

    pub fn ground_clearance(&self) -> f64 {
        self.spec.ground_clearance
    }

    pub fn mass(&self) -> f64 {
        self.spec.mass
    }

    pub fn width(&self) -> f64 {
        self.spec.width
    }

    pub fn height(&self) -> f64 {
        self.spec.height
    }

    pub fn float_fraction(&self) -> f64 {
        self.spec.float_fraction
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.spec.drag_coefficient
    }

    pub fn friction_coefficient(&self) -> f64 {
        self.spec.friction_coefficient
    }

    /// Footprint used for displaced volume: length × width (m²).
    pub fn base_area(&self) -> f64 {
        self.base_area
    }

    /// mass × g (N).
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

impl Default for VehicleParams {
    fn default() -> Self {
        let spec = VehicleSpec::default();
        Self {
            spec,
            base_area: spec.length * spec.width,
            weight: spec.mass * GRAVITY,
        }
    }
}

impl TryFrom<VehicleSpec> for VehicleParams {
    type Error = ConfigurationError;

    fn try_from(spec: VehicleSpec) -> Result<Self, Self::Error> {
        Self::new(spec)
    }
}

impl From<VehicleParams> for VehicleSpec {
    fn from(params: VehicleParams) -> Self {
        params.spec
    }
}

// =============================================================================
// Operating point
// =============================================================================

/// A single (water height, water velocity) sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingPoint {
    /// Water depth above the road surface (m).
    pub water_height: f64,
    /// Depth-averaged flow velocity (m/s).
    pub water_velocity: f64,
}

impl OperatingPoint {
    pub fn new(water_height: f64, water_velocity: f64) -> Self {
        Self {
            water_height,
            water_velocity,
        }
    }
}

impl Default for OperatingPoint {
    fn default() -> Self {
        Self::new(DEFAULT_WATER_HEIGHT, DEFAULT_WATER_VELOCITY)
    }
}
