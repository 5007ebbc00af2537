//! Pass/fail text for a single operating point.

use serde::{Deserialize, Serialize};

use crate::vehicle::{OperatingPoint, VehicleParams};

use super::force_balance::ForceBalance;

/// Overall classification of an operating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Neither floating nor sliding.
    Stable,
    Slides,
    Floats,
    FloatsAndSlides,
}

impl Verdict {
    pub fn from_flags(floats: bool, slides: bool) -> Self {
        match (floats, slides) {
            (false, false) => Verdict::Stable,
            (false, true) => Verdict::Slides,
            (true, false) => Verdict::Floats,
            (true, true) => Verdict::FloatsAndSlides,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Verdict::Stable => "Stable",
            Verdict::Slides => "Sliding risk",
            Verdict::Floats => "Flotation risk",
            Verdict::FloatsAndSlides => "Flotation and sliding risk",
        }
    }

    pub fn is_safe(self) -> bool {
        self == Verdict::Stable
    }
}

/// Outcome of one check, with the forces it compared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub passed: bool,
    /// Force that destabilizes the vehicle (buoyancy or drag).
    pub load: f64,
    /// Force that resists it (weight or friction).
    pub resistance: f64,
}

impl CheckResult {
    /// `resistance - load`; negative when the check fails.
    pub fn margin(&self) -> f64 {
        self.resistance - self.load
    }
}

/// Diagnosis of an operating point built from its [`ForceBalance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub verdict: Verdict,
    pub flotation: CheckResult,
    pub sliding: CheckResult,
    pub drag_over_friction: f64,
    pub buoyancy_over_weight: f64,
}

impl Diagnosis {
    pub fn from_balance(balance: &ForceBalance) -> Self {
        Self {
            verdict: Verdict::from_flags(balance.floats, balance.slides),
            flotation: CheckResult {
                passed: !balance.floats,
                load: balance.buoyancy,
                resistance: balance.weight,
            },
            sliding: CheckResult {
                passed: !balance.slides,
                load: balance.drag_force,
                resistance: balance.friction_force,
            },
            drag_over_friction: balance.drag_over_friction(),
            buoyancy_over_weight: balance.buoyancy_over_weight(),
        }
    }

    /// Human-readable lines for the diagnostics panel.
    pub fn lines(&self) -> Vec<String> {
        let flotation = if self.flotation.passed {
            format!(
                "PASS flotation: buoyancy {:.0} N < weight {:.0} N (margin {:.0} N)",
                self.flotation.load,
                self.flotation.resistance,
                self.flotation.margin()
            )
        } else {
            format!(
                "FAIL flotation: buoyancy {:.0} N exceeds weight {:.0} N, the vehicle floats",
                self.flotation.load, self.flotation.resistance
            )
        };
        let sliding = if self.sliding.passed {
            format!(
                "PASS sliding: drag {:.0} N < friction {:.0} N (margin {:.0} N)",
                self.sliding.load,
                self.sliding.resistance,
                self.sliding.margin()
            )
        } else {
            format!(
                "FAIL sliding: drag {:.0} N exceeds friction {:.0} N, the vehicle slides",
                self.sliding.load, self.sliding.resistance
            )
        };

        vec![
            format!("Verdict: {}", self.verdict.name()),
            flotation,
            sliding,
            format!(
                "Risk ratios: drag/friction {:.2}, buoyancy/weight {:.2}",
                self.drag_over_friction, self.buoyancy_over_weight
            ),
        ]
    }
}

/// Two-line parameter footer shown under shared charts.
pub fn params_summary(params: &VehicleParams, point: OperatingPoint) -> String {
    format!(
        "Water height: {:.2} m  |  Velocity: {:.2} m/s\nMass: {:.0} kg  |  \u{3bc}={:.2}  Cd={:.2}",
        point.water_height,
        point.water_velocity,
        params.mass(),
        params.friction_coefficient(),
        params.drag_coefficient()
    )
}
