//! Bar chart of the five forces at the operating point.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::risk_model::{ForceBalance, RiskOutputs};

use crate::theme::{pass_fail_color, MUTED_COLOR};

const CHART_WIDTH: f32 = 340.0;
const CHART_HEIGHT: f32 = 180.0;
const LABEL_BAND: f32 = 18.0;

#[derive(Resource)]
pub struct ForceChartVisible(pub bool);

impl Default for ForceChartVisible {
    fn default() -> Self {
        Self(true)
    }
}

pub(crate) struct ForceBar {
    pub label: &'static str,
    pub newtons: f64,
    pub color: egui::Color32,
}

fn bar_color(label: &str) -> egui::Color32 {
    match label {
        "Buoyancy" => egui::Color32::from_rgb(90, 160, 230),
        "Weight" => egui::Color32::from_rgb(170, 170, 185),
        "Normal" => egui::Color32::from_rgb(130, 120, 200),
        "Friction" => egui::Color32::from_rgb(110, 200, 140),
        "Drag" => egui::Color32::from_rgb(240, 140, 70),
        _ => MUTED_COLOR,
    }
}

pub(crate) fn force_bars(balance: &ForceBalance) -> Vec<ForceBar> {
    balance
        .labelled_forces()
        .into_iter()
        .map(|(label, newtons)| ForceBar {
            label,
            newtons,
            color: bar_color(label),
        })
        .collect()
}

/// Bar heights in pixels, scaled so the largest force fills `max_height`.
pub(crate) fn scaled_heights(bars: &[ForceBar], max_height: f32) -> Vec<f32> {
    let peak = bars.iter().map(|b| b.newtons).fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return vec![0.0; bars.len()];
    }
    bars.iter()
        .map(|b| (b.newtons.max(0.0) / peak) as f32 * max_height)
        .collect()
}

pub(crate) fn draw_force_bars(ui: &mut egui::Ui, bars: &[ForceBar]) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(CHART_WIDTH, CHART_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 2.0, egui::Color32::from_gray(28));
    paint_force_bars(&painter, rect, bars, 11.0, egui::Color32::from_gray(200));
}

/// Paint the bars into `rect`, leaving a label band above and below the plot.
pub(crate) fn paint_force_bars(
    painter: &egui::Painter,
    rect: egui::Rect,
    bars: &[ForceBar],
    font_size: f32,
    text_color: egui::Color32,
) {
    if bars.is_empty() {
        return;
    }

    let label_band = LABEL_BAND * font_size / 11.0;
    let plot_height = (rect.height() - 2.0 * label_band).max(0.0);
    let heights = scaled_heights(bars, plot_height);
    let slot = rect.width() / bars.len() as f32;
    let baseline = rect.max.y - label_band;

    painter.line_segment(
        [
            egui::pos2(rect.min.x, baseline),
            egui::pos2(rect.max.x, baseline),
        ],
        egui::Stroke::new(0.5, egui::Color32::from_gray(110)),
    );

    let font = egui::FontId::proportional(font_size);
    for (i, (bar, h)) in bars.iter().zip(heights).enumerate() {
        let center = rect.min.x + slot * (i as f32 + 0.5);
        let bar_rect = egui::Rect::from_min_max(
            egui::pos2(center - slot * 0.3, baseline - h),
            egui::pos2(center + slot * 0.3, baseline),
        );
        painter.rect_filled(bar_rect, 1.0, bar.color);
        painter.text(
            egui::pos2(center, baseline - h - 2.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{:.0}", bar.newtons),
            font.clone(),
            text_color,
        );
        painter.text(
            egui::pos2(center, baseline + 3.0),
            egui::Align2::CENTER_TOP,
            bar.label,
            font.clone(),
            text_color,
        );
    }
}

pub fn force_chart_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<ForceChartVisible>,
    outputs: Res<RiskOutputs>,
) {
    if !visible.0 {
        return;
    }

    let balance = &outputs.balance;
    let mut open = visible.0;
    egui::Window::new("Forces")
        .open(&mut open)
        .default_pos(egui::pos2(320.0, 40.0))
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.small("Newtons at the operating point");
            draw_force_bars(ui, &force_bars(balance));

            ui.horizontal(|ui| {
                ui.label("Floats:");
                ui.colored_label(pass_fail_color(!balance.floats), yes_no(balance.floats));
                ui.separator();
                ui.label("Slides:");
                ui.colored_label(pass_fail_color(!balance.slides), yes_no(balance.slides));
            });
            ui.colored_label(
                MUTED_COLOR,
                format!("Submerged depth {:.2} m", balance.submerged_height),
            );
        });
    visible.0 = open;
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
