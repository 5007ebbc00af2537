//! Risk-ratio fields over a height × velocity sweep.
//!
//! Layout is row-major with velocity as the row axis and height as the column
//! axis: `index = row * cols + col`, where `row` indexes `velocities` and `col`
//! indexes `heights`. Renderers rely on this to place the operating-point
//! marker, so it must not change.

use serde::{Deserialize, Serialize};

use crate::risk_error::{GridAxis, InvalidGridError};
use crate::vehicle::{OperatingPoint, VehicleParams};

use super::force_balance::{
    buoyancy_at, buoyancy_over_weight, drag_factor_at, drag_force_at, drag_over_friction,
    submerged_height,
};
use super::sweep::SweepConfig;

/// Two clamped risk ratios sampled on the same (velocity, height) grid.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskField {
    heights: Vec<f64>,
    velocities: Vec<f64>,
    drag_over_friction: Vec<f64>,
    buoyancy_over_weight: Vec<f64>,
}

/// Aggregate view of a [`RiskField`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub max_drag_over_friction: f64,
    pub max_buoyancy_over_weight: f64,
    /// Share of grid nodes where drag exceeds friction (ratio > 1).
    pub sliding_fraction: f64,
    /// Share of grid nodes where buoyancy exceeds weight (ratio > 1).
    pub floating_fraction: f64,
}

/// Terms of the force balance that depend on water height only.
struct ColumnTerms {
    friction_force: f64,
    drag_factor: f64,
    buoyancy_ratio: f64,
}

fn check_samples(axis: GridAxis, samples: &[f64]) -> Result<(), InvalidGridError> {
    if samples.is_empty() {
        return Err(match axis {
            GridAxis::Height => InvalidGridError::EmptyHeights,
            GridAxis::Velocity => InvalidGridError::EmptyVelocities,
        });
    }
    if let Some(bad) = samples.iter().find(|v| !v.is_finite()) {
        return Err(InvalidGridError::InvalidRange {
            axis,
            reason: format!("contains non-finite sample {bad}"),
        });
    }
    Ok(())
}

/// Evaluate both risk ratios at every (velocity, height) combination.
///
/// Equivalent to calling [`super::evaluate_point`] on each node, but the
/// height-only terms (buoyancy, friction, drag area) are computed once per
/// column and each row only scales the drag factor by `v²`.
pub fn evaluate_grid(
    params: &VehicleParams,
    heights: &[f64],
    velocities: &[f64],
) -> Result<RiskField, InvalidGridError> {
    check_samples(GridAxis::Height, heights)?;
    check_samples(GridAxis::Velocity, velocities)?;

    let weight = params.weight();
    let columns: Vec<ColumnTerms> = heights
        .iter()
        .map(|&h| {
            let submerged = submerged_height(params, h);
            let buoyancy = buoyancy_at(params, submerged);
            let normal_force = (weight - buoyancy).max(0.0);
            ColumnTerms {
                friction_force: params.friction_coefficient() * normal_force,
                drag_factor: drag_factor_at(params, submerged),
                buoyancy_ratio: buoyancy_over_weight(buoyancy, weight),
            }
        })
        .collect();

    let len = heights.len() * velocities.len();
    let mut drag_ratios = Vec::with_capacity(len);
    let mut buoyancy_ratios = Vec::with_capacity(len);

    for &v in velocities {
        let v_squared = v.powi(2);
        for column in &columns {
            drag_ratios.push(drag_over_friction(
                drag_force_at(column.drag_factor, v_squared),
                column.friction_force,
            ));
            buoyancy_ratios.push(column.buoyancy_ratio);
        }
    }

    Ok(RiskField {
        heights: heights.to_vec(),
        velocities: velocities.to_vec(),
        drag_over_friction: drag_ratios,
        buoyancy_over_weight: buoyancy_ratios,
    })
}

/// Sample `sweep` and evaluate the grid over it.
pub fn evaluate_sweep(
    params: &VehicleParams,
    sweep: &SweepConfig,
) -> Result<RiskField, InvalidGridError> {
    sweep.validate()?;
    evaluate_grid(params, &sweep.heights.values(), &sweep.velocities.values())
}

impl RiskField {
    /// `(rows, cols)` = `(velocity samples, height samples)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.velocities.len(), self.heights.len())
    }

    pub fn rows(&self) -> usize {
        self.velocities.len()
    }

    pub fn cols(&self) -> usize {
        self.heights.len()
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    /// Row-major drag/friction ratios.
    pub fn drag_over_friction(&self) -> &[f64] {
        &self.drag_over_friction
    }

    /// Row-major buoyancy/weight ratios.
    pub fn buoyancy_over_weight(&self) -> &[f64] {
        &self.buoyancy_over_weight
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.heights.len() + col
    }

    pub fn drag_ratio_at(&self, row: usize, col: usize) -> f64 {
        self.drag_over_friction[self.index(row, col)]
    }

    pub fn buoyancy_ratio_at(&self, row: usize, col: usize) -> f64 {
        self.buoyancy_over_weight[self.index(row, col)]
    }

    /// One velocity row of the drag/friction field.
    pub fn drag_row(&self, row: usize) -> &[f64] {
        let cols = self.heights.len();
        &self.drag_over_friction[row * cols..(row + 1) * cols]
    }

    /// Grid node closest to `point`, or `None` if the point lies outside the
    /// sampled height/velocity extent.
    pub fn nearest_cell(&self, point: OperatingPoint) -> Option<(usize, usize)> {
        let row = nearest_index(&self.velocities, point.water_velocity)?;
        let col = nearest_index(&self.heights, point.water_height)?;
        Some((row, col))
    }

    pub fn summary(&self) -> RiskSummary {
        let n = self.drag_over_friction.len().max(1) as f64;
        let max_drag = self
            .drag_over_friction
            .iter()
            .copied()
            .fold(0.0_f64, f64::max);
        let max_buoyancy = self
            .buoyancy_over_weight
            .iter()
            .copied()
            .fold(0.0_f64, f64::max);
        let sliding = self.drag_over_friction.iter().filter(|&&r| r > 1.0).count();
        let floating = self
            .buoyancy_over_weight
            .iter()
            .filter(|&&r| r > 1.0)
            .count();

        RiskSummary {
            max_drag_over_friction: max_drag,
            max_buoyancy_over_weight: max_buoyancy,
            sliding_fraction: sliding as f64 / n,
            floating_fraction: floating as f64 / n,
        }
    }
}

fn nearest_index(axis: &[f64], value: f64) -> Option<usize> {
    let min = axis.iter().copied().fold(f64::INFINITY, f64::min);
    let max = axis.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(value >= min && value <= max) {
        return None;
    }
    axis.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - value).abs().total_cmp(&(*b - value).abs()))
        .map(|(i, _)| i)
}
