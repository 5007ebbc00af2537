use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::risk_model::RiskOutputs;

use crate::diagnostics_panel::DiagnosticsVisible;
use crate::force_chart::ForceChartVisible;
use crate::share_preview::SharePreviewVisible;
use crate::theme::verdict_color;

pub fn menu_bar_ui(
    mut contexts: EguiContexts,
    outputs: Res<RiskOutputs>,
    mut forces: ResMut<ForceChartVisible>,
    mut diagnosis: ResMut<DiagnosticsVisible>,
    mut share: ResMut<SharePreviewVisible>,
) {
    egui::TopBottomPanel::top("menu_bar").show(contexts.ctx_mut(), |ui| {
        ui.horizontal(|ui| {
            ui.strong("Flood Vehicle Risk");
            ui.separator();
            ui.toggle_value(&mut forces.0, "Forces");
            ui.toggle_value(&mut diagnosis.0, "Diagnosis");
            ui.toggle_value(&mut share.0, "Share card");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let verdict = outputs.diagnosis.verdict;
                ui.colored_label(verdict_color(verdict), verdict.name());
            });
        });
    });
}
