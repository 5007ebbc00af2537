//! Risk model resources, the recompute system, and the plugin.
//!
//! The input surface writes a complete [`RiskInputs`] value; the
//! `recompute_risk` system reads it by shared reference, runs the pure model,
//! and replaces [`RiskOutputs`]. It only runs on frames where the inputs
//! changed, so the grid sweep is not repeated every frame.

use bevy::ecs::schedule::common_conditions::resource_changed;
use bevy::prelude::*;
use bevy::utils::Instant;

use crate::risk_error::InvalidGridError;
use crate::vehicle::{OperatingPoint, VehicleParams};

use super::diagnostics::Diagnosis;
use super::force_balance::{evaluate_point, ForceBalance};
use super::risk_grid::{evaluate_sweep, RiskField};
use super::sweep::SweepConfig;

// =============================================================================
// Resources
// =============================================================================

/// Everything the model needs for one evaluation.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct RiskInputs {
    pub vehicle: VehicleParams,
    pub point: OperatingPoint,
    pub sweep: SweepConfig,
}

/// Latest model results for the rendering side.
#[derive(Resource, Debug, Clone)]
pub struct RiskOutputs {
    pub balance: ForceBalance,
    pub diagnosis: Diagnosis,
    /// `None` until the first sweep, or when the sweep configuration is invalid.
    pub field: Option<RiskField>,
    pub grid_error: Option<InvalidGridError>,
    /// Incremented on every recompute so consumers can refresh cached textures.
    pub revision: u64,
}

impl Default for RiskOutputs {
    fn default() -> Self {
        let inputs = RiskInputs::default();
        let balance = evaluate_point(&inputs.vehicle, inputs.point);
        Self {
            diagnosis: Diagnosis::from_balance(&balance),
            balance,
            field: None,
            grid_error: None,
            revision: 0,
        }
    }
}

// =============================================================================
// System
// =============================================================================

/// Re-evaluate the operating point and the risk grid from the current inputs.
pub fn recompute_risk(inputs: Res<RiskInputs>, mut outputs: ResMut<RiskOutputs>) {
    let started = Instant::now();

    let balance = evaluate_point(&inputs.vehicle, inputs.point);
    let diagnosis = Diagnosis::from_balance(&balance);
    if diagnosis.verdict != outputs.diagnosis.verdict {
        info!(
            "Risk verdict changed: {} -> {} (h = {:.2} m, v = {:.2} m/s)",
            outputs.diagnosis.verdict.name(),
            diagnosis.verdict.name(),
            inputs.point.water_height,
            inputs.point.water_velocity
        );
    }
    outputs.balance = balance;
    outputs.diagnosis = diagnosis;

    match evaluate_sweep(&inputs.vehicle, &inputs.sweep) {
        Ok(field) => {
            let (rows, cols) = field.shape();
            debug!(
                "Risk grid {}x{} evaluated in {:?}",
                rows,
                cols,
                started.elapsed()
            );
            outputs.field = Some(field);
            outputs.grid_error = None;
        }
        Err(err) => {
            warn!("Risk grid not evaluated: {err}");
            outputs.field = None;
            outputs.grid_error = Some(err);
        }
    }

    outputs.revision += 1;
}

// =============================================================================
// Plugin
// =============================================================================

pub struct RiskModelPlugin;

impl Plugin for RiskModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RiskInputs>()
            .init_resource::<RiskOutputs>()
            .add_systems(Update, recompute_risk.run_if(resource_changed::<RiskInputs>));
    }
}
