//! Closed-form force balance at a single operating point.

use serde::{Deserialize, Serialize};

use crate::config::{
    BUOYANCY_RATIO_CEILING, DRAG_RATIO_CEILING, GRAVITY, RATIO_EPSILON, WATER_DENSITY,
};
use crate::vehicle::{OperatingPoint, VehicleParams};

/// Forces acting on a vehicle standing in flowing water (all in N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceBalance {
    /// Water depth above ground clearance (m), never negative.
    pub submerged_height: f64,
    pub buoyancy: f64,
    pub weight: f64,
    /// Ground reaction, floored at zero once the vehicle is lifted.
    pub normal_force: f64,
    /// Maximum static resistance to sliding.
    pub friction_force: f64,
    /// Lateral hydrodynamic drag on the submerged side area.
    pub drag_force: f64,
    /// `buoyancy > weight`
    pub floats: bool,
    /// `drag_force > friction_force`
    pub slides: bool,
}

/// Drag/friction with the epsilon guard, clamped to `[0, DRAG_RATIO_CEILING]`.
#[inline]
pub fn drag_over_friction(drag_force: f64, friction_force: f64) -> f64 {
    clamp_ratio(drag_force / (friction_force + RATIO_EPSILON), DRAG_RATIO_CEILING)
}

/// Buoyancy/weight with the epsilon guard, clamped to `[0, BUOYANCY_RATIO_CEILING]`.
#[inline]
pub fn buoyancy_over_weight(buoyancy: f64, weight: f64) -> f64 {
    clamp_ratio(buoyancy / (weight + RATIO_EPSILON), BUOYANCY_RATIO_CEILING)
}

/// `f64::clamp` passes NaN through; an undefined ratio reads as no risk.
#[inline]
fn clamp_ratio(ratio: f64, ceiling: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, ceiling)
    }
}

/// Water depth that actually wets the body.
#[inline]
pub(crate) fn submerged_height(params: &VehicleParams, water_height: f64) -> f64 {
    (water_height - params.ground_clearance()).max(0.0)
}

/// Buoyancy for a given submerged height.
#[inline]
pub(crate) fn buoyancy_at(params: &VehicleParams, submerged: f64) -> f64 {
    let displaced_volume = submerged * params.base_area();
    WATER_DENSITY * GRAVITY * displaced_volume * params.float_fraction()
}

/// Drag per unit squared velocity for a given submerged height, so that
/// `drag = drag_factor_at(..) * v²`.
#[inline]
pub(crate) fn drag_factor_at(params: &VehicleParams, submerged: f64) -> f64 {
    let lateral_area = submerged * params.width();
    0.5 * params.drag_coefficient() * WATER_DENSITY * lateral_area
}

/// `drag_factor * v²`, zero whenever either side is zero even if the other
/// overflowed to infinity.
#[inline]
pub(crate) fn drag_force_at(drag_factor: f64, v_squared: f64) -> f64 {
    if drag_factor == 0.0 || v_squared == 0.0 {
        0.0
    } else {
        drag_factor * v_squared
    }
}

/// Evaluate the force balance at one operating point.
///
/// Never fails: water below ground clearance saturates at zero submersion and
/// a lifted vehicle has exactly zero normal force.
pub fn evaluate_point(params: &VehicleParams, point: OperatingPoint) -> ForceBalance {
    let submerged = submerged_height(params, point.water_height);
    let buoyancy = buoyancy_at(params, submerged);
    let weight = params.weight();
    let normal_force = (weight - buoyancy).max(0.0);
    let friction_force = params.friction_coefficient() * normal_force;
    let drag_force = drag_force_at(
        drag_factor_at(params, submerged),
        point.water_velocity.powi(2),
    );

    ForceBalance {
        submerged_height: submerged,
        buoyancy,
        weight,
        normal_force,
        friction_force,
        drag_force,
        floats: buoyancy > weight,
        slides: drag_force > friction_force,
    }
}

impl ForceBalance {
    /// Drag/friction risk ratio for this point, using the grid's clamp policy.
    pub fn drag_over_friction(&self) -> f64 {
        drag_over_friction(self.drag_force, self.friction_force)
    }

    /// Buoyancy/weight risk ratio for this point, using the grid's clamp policy.
    pub fn buoyancy_over_weight(&self) -> f64 {
        buoyancy_over_weight(self.buoyancy, self.weight)
    }

    /// The five forces in chart order with their labels.
    pub fn labelled_forces(&self) -> [(&'static str, f64); 5] {
        [
            ("Buoyancy", self.buoyancy),
            ("Weight", self.weight),
            ("Normal", self.normal_force),
            ("Friction", self.friction_force),
            ("Drag", self.drag_force),
        ]
    }
}
