use bevy_egui::{egui, EguiContexts};

use simulation::risk_model::Verdict;

pub const SAFE_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 220, 120);
pub const WARN_COLOR: egui::Color32 = egui::Color32::from_rgb(240, 190, 70);
pub const DANGER_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 80, 70);
pub const MUTED_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 155, 170);

/// One color per verdict: green when both checks pass, amber when only one
/// fails, red when the vehicle both floats and slides.
pub fn verdict_color(verdict: Verdict) -> egui::Color32 {
    match verdict {
        Verdict::Stable => SAFE_COLOR,
        Verdict::Slides | Verdict::Floats => WARN_COLOR,
        Verdict::FloatsAndSlides => DANGER_COLOR,
    }
}

pub fn pass_fail_color(passed: bool) -> egui::Color32 {
    if passed {
        SAFE_COLOR
    } else {
        DANGER_COLOR
    }
}

pub fn apply_flood_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Deep water-blue background
    let panel = egui::Color32::from_rgb(30, 36, 48);
    let inactive = egui::Color32::from_rgb(45, 55, 72);
    let hover = egui::Color32::from_rgb(60, 80, 110);
    let active = egui::Color32::from_rgb(70, 150, 220);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(22, 26, 34);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(36, 42, 56);

    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    // egui 0.31+ takes u8 corner radii
    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(4);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.slider_width = 180.0;

    ctx.set_style(style);
}
