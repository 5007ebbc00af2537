//! Verdict and pass/fail breakdown for the current operating point.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::risk_model::{params_summary, CheckResult, RiskInputs, RiskOutputs, RiskSummary};

use crate::theme::{pass_fail_color, verdict_color, MUTED_COLOR, WARN_COLOR};

#[derive(Resource)]
pub struct DiagnosticsVisible(pub bool);

impl Default for DiagnosticsVisible {
    fn default() -> Self {
        Self(true)
    }
}

fn render_check(ui: &mut egui::Ui, name: &str, load: &str, resistance: &str, check: &CheckResult) {
    ui.label(name);
    ui.colored_label(
        pass_fail_color(check.passed),
        if check.passed { "PASS" } else { "FAIL" },
    );
    ui.label(format!("{load} {:.0} N", check.load));
    ui.label(format!("{resistance} {:.0} N", check.resistance));
    ui.label(format!("{:+.0} N", check.margin()));
    ui.end_row();
}

fn render_grid_summary(ui: &mut egui::Ui, summary: &RiskSummary) {
    ui.heading("Grid");
    egui::Grid::new("risk_grid_summary")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.label("Sliding area:");
            ui.label(format!("{:.0}%", summary.sliding_fraction * 100.0));
            ui.end_row();
            ui.label("Floating area:");
            ui.label(format!("{:.0}%", summary.floating_fraction * 100.0));
            ui.end_row();
            ui.label("Peak drag/friction:");
            ui.label(format!("{:.2}", summary.max_drag_over_friction));
            ui.end_row();
            ui.label("Peak buoyancy/weight:");
            ui.label(format!("{:.2}", summary.max_buoyancy_over_weight));
            ui.end_row();
        });
}

pub fn diagnostics_panel_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<DiagnosticsVisible>,
    inputs: Res<RiskInputs>,
    outputs: Res<RiskOutputs>,
) {
    if !visible.0 {
        return;
    }

    let diagnosis = &outputs.diagnosis;
    let mut open = visible.0;
    egui::Window::new("Diagnosis")
        .open(&mut open)
        .default_pos(egui::pos2(320.0, 300.0))
        .default_width(380.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                ui.label("Verdict:");
                ui.colored_label(
                    verdict_color(diagnosis.verdict),
                    egui::RichText::new(diagnosis.verdict.name()).strong(),
                );
            });
            ui.separator();

            egui::Grid::new("diagnosis_checks")
                .num_columns(5)
                .spacing([10.0, 4.0])
                .show(ui, |ui| {
                    ui.strong("Check");
                    ui.strong("");
                    ui.strong("Load");
                    ui.strong("Resistance");
                    ui.strong("Margin");
                    ui.end_row();
                    render_check(ui, "Flotation", "buoyancy", "weight", &diagnosis.flotation);
                    render_check(ui, "Sliding", "drag", "friction", &diagnosis.sliding);
                });

            ui.add_space(4.0);
            for line in diagnosis.lines().iter().skip(1) {
                ui.small(line);
            }

            ui.separator();
            if let Some(field) = outputs.field.as_ref() {
                render_grid_summary(ui, &field.summary());
            } else if let Some(err) = &outputs.grid_error {
                ui.colored_label(WARN_COLOR, err.to_string());
            }

            ui.separator();
            for line in params_summary(&inputs.vehicle, inputs.point).lines() {
                ui.colored_label(MUTED_COLOR, line);
            }
        });
    visible.0 = open;
}
