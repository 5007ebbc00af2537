//! Vehicle flotation and sliding risk under flood flow.
//!
//! A vehicle standing in water of depth `h` flowing at velocity `v` is loaded
//! by buoyancy (lifting it, which removes ground reaction and therefore
//! friction) and by lateral drag (pushing it sideways). The model compares:
//!
//! - **flotation**: buoyancy against weight
//! - **sliding**: drag against the friction left after buoyancy
//!
//! `evaluate_point` gives the full force balance at one operating point;
//! `evaluate_grid` sweeps a height × velocity grid and returns the two ratios
//! clamped into a fixed display range (`drag/friction <= 3`,
//! `buoyancy/weight <= 2`). All functions are pure and re-entrant.

pub mod diagnostics;
pub mod force_balance;
pub mod risk_grid;
pub mod sweep;
pub mod systems;

#[cfg(test)]
mod tests_diagnostics;
#[cfg(test)]
mod tests_force_balance;
#[cfg(test)]
mod tests_risk_grid;

pub use diagnostics::{params_summary, CheckResult, Diagnosis, Verdict};
pub use force_balance::{buoyancy_over_weight, drag_over_friction, evaluate_point, ForceBalance};
pub use risk_grid::{evaluate_grid, evaluate_sweep, RiskField, RiskSummary};
pub use sweep::{SweepConfig, SweepRange};
pub use systems::{recompute_risk, RiskInputs, RiskModelPlugin, RiskOutputs};
