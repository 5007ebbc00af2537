use bevy::prelude::*;

pub mod agent_protocol;
pub mod config;
pub mod risk_error;
pub mod risk_model;
pub mod vehicle;

pub use risk_error::{ConfigurationError, InvalidGridError};
pub use vehicle::{OperatingPoint, VehicleParams, VehicleSpec};

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(risk_model::RiskModelPlugin);
    }
}
