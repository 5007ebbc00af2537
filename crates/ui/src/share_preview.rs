//! Scaled preview of the shareable result card.
//!
//! The preview paints the card geometry from `ShareCardLayout` directly with
//! egui shapes. The chart area shows either the force bars or the heatmap
//! textures.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::share_card::{
    background_row_color, PixelRect, ShareCardLayout, ShareChart, ShareFormat, FOOTER_FILL, TITLE,
};
use rendering::ShareCardSettings;
use simulation::risk_model::{params_summary, ForceBalance, RiskInputs, RiskOutputs};

use crate::force_chart::{force_bars, paint_force_bars};
use crate::heatmap_panel::HeatmapTextures;

/// Nominal pixel size of the chart pasted into the card.
pub const CHART_SIZE: (u32, u32) = (2000, 900);
/// Nominal pixel size of the placeholder logo.
pub const LOGO_SIZE: (u32, u32) = (400, 200);

const PREVIEW_WIDTH: f32 = 420.0;
const GRADIENT_BANDS: i32 = 24;

#[derive(Resource, Default)]
pub struct SharePreviewVisible(pub bool);

/// Map a card rectangle into screen space.
pub(crate) fn card_to_screen(rect: PixelRect, origin: egui::Pos2, scale: f32) -> egui::Rect {
    egui::Rect::from_min_max(
        egui::pos2(
            origin.x + rect.left as f32 * scale,
            origin.y + rect.top as f32 * scale,
        ),
        egui::pos2(
            origin.x + rect.right as f32 * scale,
            origin.y + rect.bottom as f32 * scale,
        ),
    )
}

fn card_point(x: i32, y: i32, origin: egui::Pos2, scale: f32) -> egui::Pos2 {
    egui::pos2(origin.x + x as f32 * scale, origin.y + y as f32 * scale)
}

pub(crate) fn compute_layout(settings: &ShareCardSettings) -> ShareCardLayout {
    let logo = settings.show_logo.then_some(LOGO_SIZE);
    ShareCardLayout::compute(settings.format, CHART_SIZE, logo)
}

/// What goes into the graph area.
enum CardChart<'a> {
    Forces(&'a ForceBalance),
    Heatmaps(&'a HeatmapTextures),
}

fn paint_heatmaps(
    painter: &egui::Painter,
    chart: egui::Rect,
    scale: f32,
    textures: &HeatmapTextures,
) {
    let half = chart.width() / 2.0;
    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    for (i, tex) in [textures.drag.as_ref(), textures.buoyancy.as_ref()]
        .into_iter()
        .enumerate()
    {
        let panel = egui::Rect::from_min_size(
            egui::pos2(chart.min.x + half * i as f32, chart.min.y),
            egui::vec2(half, chart.height()),
        )
        .shrink(4.0 * scale.max(0.25));
        match tex {
            Some(tex) => {
                painter.image(tex.id(), panel, uv, egui::Color32::WHITE);
            }
            None => {
                painter.rect_filled(panel, 0.0, egui::Color32::from_gray(200));
            }
        }
    }
}

fn paint_card(
    painter: &egui::Painter,
    origin: egui::Pos2,
    scale: f32,
    layout: &ShareCardLayout,
    chart: CardChart<'_>,
    footer_lines: &[&str],
    handle: &str,
) {
    let (w, h) = layout.format.canvas_size();

    // Gradient background in horizontal bands.
    let band = (h / GRADIENT_BANDS).max(1);
    for top in (0..h).step_by(band as usize) {
        let [r, g, b] = background_row_color(top, h);
        let rect = PixelRect::new(0, top, w, (top + band).min(h));
        painter.rect_filled(
            card_to_screen(rect, origin, scale),
            0.0,
            egui::Color32::from_rgb(r, g, b),
        );
    }

    let (tx, ty) = layout.title_band.center();
    painter.text(
        card_point(tx, ty, origin, scale),
        egui::Align2::CENTER_CENTER,
        TITLE,
        egui::FontId::proportional(36.0 * scale),
        egui::Color32::from_rgb(30, 30, 40),
    );

    let chart_rect = card_to_screen(layout.chart, origin, scale);
    match chart {
        CardChart::Forces(balance) => paint_force_bars(
            painter,
            chart_rect,
            &force_bars(balance),
            (22.0 * scale).max(6.0),
            egui::Color32::from_gray(40),
        ),
        CardChart::Heatmaps(textures) => paint_heatmaps(painter, chart_rect, scale, textures),
    }

    let [fr, fg, fb, fa] = FOOTER_FILL;
    painter.rect_filled(
        card_to_screen(layout.footer, origin, scale),
        0.0,
        egui::Color32::from_rgba_unmultiplied(fr, fg, fb, fa),
    );

    for ((x, y), line) in layout
        .footer_line_origins(footer_lines.len())
        .into_iter()
        .zip(footer_lines)
    {
        painter.text(
            card_point(x, y, origin, scale),
            egui::Align2::LEFT_TOP,
            *line,
            egui::FontId::proportional(20.0 * scale),
            egui::Color32::from_gray(40),
        );
    }

    if let Some(logo) = layout.logo {
        let rect = card_to_screen(logo, origin, scale);
        painter.rect_stroke(
            rect,
            2.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
            egui::StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "logo",
            egui::FontId::proportional(16.0 * scale),
            egui::Color32::from_gray(120),
        );
    }

    let (hx, hy) = layout.handle_origin;
    painter.text(
        card_point(hx, hy, origin, scale),
        egui::Align2::LEFT_TOP,
        handle,
        egui::FontId::proportional(16.0 * scale),
        egui::Color32::from_gray(80),
    );
}

pub fn share_preview_ui(
    mut contexts: EguiContexts,
    mut visible: ResMut<SharePreviewVisible>,
    mut settings: ResMut<ShareCardSettings>,
    inputs: Res<RiskInputs>,
    outputs: Res<RiskOutputs>,
    textures: Res<HeatmapTextures>,
) {
    if !visible.0 {
        return;
    }

    let summary = params_summary(&inputs.vehicle, inputs.point);
    let footer_lines: Vec<&str> = summary.lines().collect();

    let mut open = visible.0;
    egui::Window::new("Share card")
        .open(&mut open)
        .resizable(false)
        .default_width(PREVIEW_WIDTH + 16.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                ui.label("Format:");
                for format in ShareFormat::ALL {
                    ui.selectable_value(&mut settings.format, format, format.label());
                }
            });
            ui.horizontal(|ui| {
                ui.label("Chart:");
                for chart in ShareChart::ALL {
                    ui.selectable_value(&mut settings.chart, chart, chart.label());
                }
            });
            ui.horizontal(|ui| {
                ui.label("Handle:");
                ui.add(egui::TextEdit::singleline(&mut settings.handle).desired_width(160.0));
                ui.checkbox(&mut settings.show_logo, "Logo");
            });
            ui.separator();

            let layout = compute_layout(&settings);
            let scale = layout.preview_scale(PREVIEW_WIDTH);
            let (cw, ch) = layout.format.canvas_size();
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(cw as f32 * scale, ch as f32 * scale),
                egui::Sense::hover(),
            );
            let painter = ui.painter_at(rect);
            let chart = match settings.chart {
                ShareChart::Forces => CardChart::Forces(&outputs.balance),
                ShareChart::Heatmaps => CardChart::Heatmaps(&textures),
            };
            paint_card(
                &painter,
                rect.min,
                scale,
                &layout,
                chart,
                &footer_lines,
                &settings.handle,
            );
        });
    visible.0 = open;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_to_screen_scales_and_offsets() {
        let rect = card_to_screen(
            PixelRect::new(80, 140, 1000, 820),
            egui::pos2(10.0, 20.0),
            0.5,
        );
        assert_eq!(rect.min, egui::pos2(50.0, 90.0));
        assert_eq!(rect.max, egui::pos2(510.0, 430.0));
    }

    #[test]
    fn test_layout_follows_settings() {
        let mut settings = ShareCardSettings::default();
        assert_eq!(settings.chart, ShareChart::Forces);
        let square = compute_layout(&settings);
        assert_eq!(square.format, ShareFormat::Square);
        assert!(square.logo.is_none());
        assert!(square.graph_area.contains_rect(&square.chart));

        settings.format = ShareFormat::Landscape;
        settings.show_logo = true;
        let landscape = compute_layout(&settings);
        let logo = landscape.logo.expect("logo requested");
        assert!(landscape.canvas.contains_rect(&logo));
        assert!(landscape.graph_area.contains_rect(&landscape.chart));
    }

    #[test]
    fn test_preview_fits_window_width() {
        for format in ShareFormat::ALL {
            let layout = ShareCardLayout::compute(format, CHART_SIZE, None);
            let scale = layout.preview_scale(PREVIEW_WIDTH);
            assert!(layout.canvas.width() as f32 * scale <= PREVIEW_WIDTH + 1e-3);
        }
    }
}
