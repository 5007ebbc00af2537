//! Left-hand parameter panel.
//!
//! Vehicle fields are edited on a [`VehicleDraft`] and only reach
//! `RiskInputs` once the whole record passes `VehicleParams::new`. A
//! rejected draft stays on screen with the reason next to the controls.

use std::ops::RangeInclusive;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::config::{
    DEFAULT_HEIGHT_MAX, DEFAULT_HEIGHT_MIN, DEFAULT_VELOCITY_MAX, DEFAULT_VELOCITY_MIN,
};
use simulation::risk_model::{RiskInputs, SweepConfig};
use simulation::{ConfigurationError, OperatingPoint, VehicleParams, VehicleSpec};

use crate::theme::{DANGER_COLOR, MUTED_COLOR};

pub const MIN_SWEEP_SAMPLES: usize = 10;
pub const MAX_SWEEP_SAMPLES: usize = 400;

/// Vehicle fields as currently entered, valid or not.
#[derive(Resource, Debug, Clone, Default)]
pub struct VehicleDraft {
    pub spec: VehicleSpec,
    pub error: Option<ConfigurationError>,
}

impl VehicleDraft {
    /// Validate the draft and, if it passes, store it in `inputs`. Returns
    /// whether `inputs` changed.
    pub fn apply(&mut self, inputs: &mut RiskInputs) -> bool {
        match VehicleParams::new(self.spec) {
            Ok(params) => {
                self.error = None;
                if inputs.vehicle == params {
                    return false;
                }
                inputs.vehicle = params;
                true
            }
            Err(err) => {
                warn!("Vehicle edit rejected: {err}");
                self.error = Some(err);
                false
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Sliders accept any typed value; the draft validation decides.
fn param_slider(
    ui: &mut egui::Ui,
    value: &mut f64,
    range: RangeInclusive<f64>,
    text: &str,
    suffix: &str,
    decimals: usize,
) -> bool {
    ui.add(
        egui::Slider::new(value, range)
            .text(text)
            .suffix(suffix)
            .fixed_decimals(decimals)
            .clamping(egui::SliderClamping::Never),
    )
    .changed()
}

fn vehicle_section(ui: &mut egui::Ui, spec: &mut VehicleSpec) -> bool {
    let mut changed = false;
    changed |= param_slider(ui, &mut spec.mass, 500.0..=6000.0, "Mass", " kg", 0);
    changed |= param_slider(
        ui,
        &mut spec.ground_clearance,
        0.0..=0.6,
        "Ground clearance",
        " m",
        2,
    );
    changed |= param_slider(ui, &mut spec.length, 2.5..=6.5, "Length", " m", 3);
    changed |= param_slider(ui, &mut spec.width, 1.4..=2.5, "Width", " m", 3);
    changed |= param_slider(ui, &mut spec.height, 1.2..=2.5, "Height", " m", 3);
    changed |= param_slider(
        ui,
        &mut spec.float_fraction,
        0.0..=1.0,
        "Float fraction",
        "",
        2,
    );
    changed |= param_slider(ui, &mut spec.drag_coefficient, 0.3..=2.0, "Cd", "", 2);
    changed |= param_slider(ui, &mut spec.friction_coefficient, 0.0..=1.0, "μ", "", 2);
    changed
}

fn operating_point_section(ui: &mut egui::Ui, point: &mut OperatingPoint) {
    ui.add(
        egui::Slider::new(&mut point.water_height, 0.0..=DEFAULT_HEIGHT_MAX)
            .text("Water height")
            .suffix(" m")
            .fixed_decimals(2),
    );
    ui.add(
        egui::Slider::new(&mut point.water_velocity, 0.0..=DEFAULT_VELOCITY_MAX)
            .text("Velocity")
            .suffix(" m/s")
            .fixed_decimals(2),
    );
}

fn sweep_section(ui: &mut egui::Ui, sweep: &mut SweepConfig) {
    let mut samples = sweep.heights.samples.max(sweep.velocities.samples);
    let changed = ui
        .add(
            egui::Slider::new(&mut samples, MIN_SWEEP_SAMPLES..=MAX_SWEEP_SAMPLES)
                .text("Grid resolution"),
        )
        .changed();
    if changed {
        sweep.heights.samples = samples;
        sweep.velocities.samples = samples;
    }
    ui.colored_label(
        MUTED_COLOR,
        format!(
            "h {DEFAULT_HEIGHT_MIN}..{DEFAULT_HEIGHT_MAX} m, v {DEFAULT_VELOCITY_MIN}..{DEFAULT_VELOCITY_MAX} m/s"
        ),
    );
    ui.colored_label(
        MUTED_COLOR,
        format!(
            "spacing {:.3} m x {:.3} m/s",
            sweep.heights.step(),
            sweep.velocities.step()
        ),
    );
}

pub fn controls_panel_ui(
    mut contexts: EguiContexts,
    mut draft: ResMut<VehicleDraft>,
    mut inputs: ResMut<RiskInputs>,
) {
    // Edit a copy so change detection only fires on real edits.
    let mut edited = *inputs;

    let (vehicle_changed, reset) = egui::SidePanel::left("controls_panel")
        .resizable(false)
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Vehicle");
            let vehicle_changed = vehicle_section(ui, &mut draft.spec);
            if let Some(err) = &draft.error {
                ui.colored_label(DANGER_COLOR, err.to_string());
            }

            ui.separator();
            ui.heading("Flow");
            operating_point_section(ui, &mut edited.point);

            ui.separator();
            ui.heading("Sweep");
            sweep_section(ui, &mut edited.sweep);

            ui.separator();
            let reset = ui.button("Reset to reference vehicle").clicked();
            (vehicle_changed, reset)
        })
        .inner;

    if reset {
        draft.reset();
        edited = RiskInputs {
            sweep: SweepConfig::with_samples(edited.sweep.heights.samples),
            ..RiskInputs::default()
        };
        info!("Inputs reset to the reference vehicle");
    } else if vehicle_changed {
        draft.apply(&mut edited);
    }

    if edited != *inputs {
        *inputs = edited;
    }
}
