//! Central panel with the two risk heatmaps.
//!
//! Both plots share axes: water height left to right, velocity bottom to
//! top. The operating point is drawn as a marker, the ratio = 1 boundary as
//! a white line, and clicking a plot moves the operating point there.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use rendering::color_ramps::{ColorRamp, HeatmapPalette};
use rendering::heatmap::{legend_stops, marker_fraction, HeatmapImage};
use rendering::{HeatmapImages, HeatmapStyle};
use simulation::config::{BUOYANCY_RATIO_CEILING, DRAG_RATIO_CEILING};
use simulation::risk_model::{RiskField, RiskInputs, RiskOutputs};
use simulation::OperatingPoint;

use crate::theme::{DANGER_COLOR, MUTED_COLOR};

const LEGEND_STEPS: usize = 32;
const LEGEND_HEIGHT: f32 = 10.0;
const AXIS_BAND: f32 = 16.0;

/// egui copies of the heatmap images, uploaded once per rebuild.
#[derive(Resource, Default)]
pub struct HeatmapTextures {
    uploaded: Option<(u64, HeatmapPalette)>,
    pub(crate) drag: Option<egui::TextureHandle>,
    pub(crate) buoyancy: Option<egui::TextureHandle>,
}

#[derive(Clone, Copy)]
enum RiskKind {
    Sliding,
    Flotation,
}

impl RiskKind {
    fn title(self) -> &'static str {
        match self {
            RiskKind::Sliding => "Sliding risk: drag / friction",
            RiskKind::Flotation => "Flotation risk: buoyancy / weight",
        }
    }

    fn ceiling(self) -> f64 {
        match self {
            RiskKind::Sliding => DRAG_RATIO_CEILING,
            RiskKind::Flotation => BUOYANCY_RATIO_CEILING,
        }
    }

    fn ramp(self, palette: HeatmapPalette) -> &'static ColorRamp {
        match self {
            RiskKind::Sliding => palette.drag_ramp(),
            RiskKind::Flotation => palette.buoyancy_ramp(),
        }
    }

    fn values(self, field: &RiskField) -> &[f64] {
        match self {
            RiskKind::Sliding => field.drag_over_friction(),
            RiskKind::Flotation => field.buoyancy_over_weight(),
        }
    }
}

pub(crate) fn to_color_image(image: &HeatmapImage) -> Option<egui::ColorImage> {
    if image.is_empty() || image.rgba.len() != image.width * image.height * 4 {
        return None;
    }
    Some(egui::ColorImage::from_rgba_unmultiplied(
        [image.width, image.height],
        &image.rgba,
    ))
}

fn upload(ctx: &egui::Context, name: &str, image: &HeatmapImage) -> Option<egui::TextureHandle> {
    to_color_image(image).map(|img| ctx.load_texture(name, img, egui::TextureOptions::NEAREST))
}

fn rgba_to_color32(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn axis_extent(axis: &[f64]) -> Option<(f64, f64)> {
    Some((*axis.first()?, *axis.last()?))
}

/// Inverse of the marker placement: a fractional plot position (y from the
/// top) back to an operating point on the sampled extent.
pub(crate) fn fraction_to_point(
    fx: f32,
    fy_from_top: f32,
    heights: &[f64],
    velocities: &[f64],
) -> Option<OperatingPoint> {
    let (h0, h1) = axis_extent(heights)?;
    let (v0, v1) = axis_extent(velocities)?;
    let fx = f64::from(fx.clamp(0.0, 1.0));
    let fy = 1.0 - f64::from(fy_from_top.clamp(0.0, 1.0));
    Some(OperatingPoint::new(
        h0 + fx * (h1 - h0),
        v0 + fy * (v1 - v0),
    ))
}

/// For each height column, the first velocity row where the ratio reaches
/// 1. Columns that never reach it are skipped.
pub(crate) fn threshold_rows(values: &[f64], rows: usize, cols: usize) -> Vec<(usize, usize)> {
    if values.len() < rows * cols {
        return Vec::new();
    }
    (0..cols)
        .filter_map(|col| {
            (0..rows)
                .find(|&row| values[row * cols + col] >= 1.0)
                .map(|row| (col, row))
        })
        .collect()
}

fn cell_center(rect: egui::Rect, col: usize, row: usize, rows: usize, cols: usize) -> egui::Pos2 {
    let x = rect.min.x + (col as f32 + 0.5) / cols as f32 * rect.width();
    let y = rect.max.y - (row as f32 + 0.5) / rows as f32 * rect.height();
    egui::pos2(x, y)
}

fn draw_threshold(painter: &egui::Painter, rect: egui::Rect, field: &RiskField, kind: RiskKind) {
    let (rows, cols) = field.shape();
    let points: Vec<egui::Pos2> = threshold_rows(kind.values(field), rows, cols)
        .into_iter()
        .map(|(col, row)| cell_center(rect, col, row, rows, cols))
        .collect();
    let stroke = egui::Stroke::new(1.5, egui::Color32::WHITE);
    match kind {
        RiskKind::Sliding => {
            for pair in points.windows(2) {
                painter.line_segment([pair[0], pair[1]], stroke);
            }
        }
        // Buoyancy does not depend on velocity, so the boundary is vertical.
        RiskKind::Flotation => {
            if let Some(first) = points.first() {
                painter.line_segment(
                    [
                        egui::pos2(first.x, rect.min.y),
                        egui::pos2(first.x, rect.max.y),
                    ],
                    stroke,
                );
            }
        }
    }
}

fn draw_legend(ui: &mut egui::Ui, ramp: &ColorRamp, ceiling: f64, width: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, LEGEND_HEIGHT), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let stops = legend_stops(ramp, ceiling, LEGEND_STEPS);
    let step = rect.width() / stops.len().max(1) as f32;
    for (i, (_, rgba)) in stops.iter().enumerate() {
        let x = rect.min.x + i as f32 * step;
        painter.rect_filled(
            egui::Rect::from_min_max(egui::pos2(x, rect.min.y), egui::pos2(x + step, rect.max.y)),
            0.0,
            rgba_to_color32(*rgba),
        );
    }
    let one = rect.min.x + (1.0 / ceiling) as f32 * rect.width();
    painter.line_segment(
        [egui::pos2(one, rect.min.y), egui::pos2(one, rect.max.y)],
        egui::Stroke::new(1.0, egui::Color32::WHITE),
    );
    ui.horizontal(|ui| {
        ui.small("0");
        ui.add_space(width / 2.0 - 20.0);
        ui.small(format!("1.0 (threshold) .. {ceiling:.0}"));
    });
}

/// Draws one heatmap and returns the operating point under a click, if any.
fn heatmap_plot(
    ui: &mut egui::Ui,
    texture: Option<&egui::TextureHandle>,
    field: &RiskField,
    kind: RiskKind,
    palette: HeatmapPalette,
    point: OperatingPoint,
    size: egui::Vec2,
) -> Option<OperatingPoint> {
    ui.strong(kind.title());
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let painter = ui.painter_at(rect);

    if let Some(tex) = texture {
        painter.image(
            tex.id(),
            rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );
    } else {
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));
    }

    draw_threshold(&painter, rect, field, kind);

    if let Some(m) = marker_fraction(field.heights(), field.velocities(), point) {
        let pos = egui::pos2(
            rect.min.x + m.x * rect.width(),
            rect.min.y + m.y_from_top() * rect.height(),
        );
        let color = if m.inside {
            egui::Color32::BLACK
        } else {
            DANGER_COLOR
        };
        painter.circle(pos, 6.0, egui::Color32::WHITE, egui::Stroke::new(2.0, color));
    }

    let to_point = |pos: egui::Pos2| {
        let fx = (pos.x - rect.min.x) / rect.width();
        let fy = (pos.y - rect.min.y) / rect.height();
        fraction_to_point(fx, fy, field.heights(), field.velocities())
    };

    if let Some(hovered) = response.hover_pos().and_then(to_point) {
        if let Some((row, col)) = field.nearest_cell(hovered) {
            let ratio = kind.values(field)[field.index(row, col)];
            response.clone().on_hover_text(format!(
                "h = {:.2} m, v = {:.2} m/s\nratio = {:.2}",
                field.heights()[col],
                field.velocities()[row],
                ratio
            ));
        }
    }

    // Axis extents along the bottom edge.
    let (h0, h1) = axis_extent(field.heights()).unwrap_or((0.0, 0.0));
    let (v0, v1) = axis_extent(field.velocities()).unwrap_or((0.0, 0.0));
    ui.horizontal(|ui| {
        ui.colored_label(
            MUTED_COLOR,
            format!("h {h0:.2}..{h1:.2} m  |  v {v0:.2}..{v1:.2} m/s"),
        );
    });
    ui.add_space(AXIS_BAND / 2.0);
    draw_legend(ui, kind.ramp(palette), kind.ceiling(), size.x);

    if response.clicked() {
        response.interact_pointer_pos().and_then(to_point)
    } else {
        None
    }
}

pub fn heatmap_panel_ui(
    mut contexts: EguiContexts,
    images: Res<HeatmapImages>,
    outputs: Res<RiskOutputs>,
    mut style: ResMut<HeatmapStyle>,
    mut inputs: ResMut<RiskInputs>,
    mut textures: ResMut<HeatmapTextures>,
) {
    let ctx = contexts.ctx_mut();

    let key = (images.revision, images.palette);
    if textures.uploaded != Some(key) {
        textures.drag = upload(ctx, "heatmap_drag", &images.drag);
        textures.buoyancy = upload(ctx, "heatmap_buoyancy", &images.buoyancy);
        textures.uploaded = Some(key);
    }

    let mut palette = style.palette;
    let mut clicked = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Risk maps");
            ui.separator();
            ui.label("Palette:");
            for option in HeatmapPalette::ALL {
                ui.selectable_value(&mut palette, option, option.label());
            }
        });
        ui.separator();

        let Some(field) = outputs.field.as_ref() else {
            match &outputs.grid_error {
                Some(err) => ui.colored_label(DANGER_COLOR, err.to_string()),
                None => ui.label("Computing risk grid..."),
            };
            return;
        };

        let avail = ui.available_size();
        let side = ((avail.x - 24.0) / 2.0)
            .min(avail.y - 4.0 * AXIS_BAND - 3.0 * LEGEND_HEIGHT)
            .max(120.0);
        let size = egui::vec2(side, side);

        ui.horizontal_top(|ui| {
            for (kind, texture) in [
                (RiskKind::Sliding, textures.drag.as_ref()),
                (RiskKind::Flotation, textures.buoyancy.as_ref()),
            ] {
                ui.vertical(|ui| {
                    if let Some(p) =
                        heatmap_plot(ui, texture, field, kind, palette, inputs.point, size)
                    {
                        clicked = Some(p);
                    }
                });
            }
        });
    });

    if palette != style.palette {
        style.palette = palette;
    }
    if let Some(point) = clicked {
        debug!(
            "Operating point picked on heatmap: h = {:.2} m, v = {:.2} m/s",
            point.water_height, point.water_velocity
        );
        inputs.point = point;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_image_matches_heatmap_size() {
        let image = HeatmapImage {
            width: 3,
            height: 2,
            rgba: vec![255; 3 * 2 * 4],
        };
        let color = to_color_image(&image).expect("non-empty image");
        assert_eq!(color.size, [3, 2]);
        assert_eq!(color.pixels.len(), 6);
    }

    #[test]
    fn test_empty_or_short_images_are_not_uploaded() {
        assert!(to_color_image(&HeatmapImage::default()).is_none());
        let short = HeatmapImage {
            width: 2,
            height: 2,
            rgba: vec![0; 4],
        };
        assert!(to_color_image(&short).is_none());
    }

    #[test]
    fn test_fraction_to_point_inverts_marker() {
        let heights = [0.0, 0.9, 1.8];
        let velocities = [0.0, 3.0, 6.0];
        let point = OperatingPoint::new(0.45, 1.5);
        let m = marker_fraction(&heights, &velocities, point).expect("axes");
        let back = fraction_to_point(m.x, m.y_from_top(), &heights, &velocities).expect("axes");
        assert!((back.water_height - 0.45).abs() < 1e-5);
        assert!((back.water_velocity - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_fraction_to_point_top_left_is_low_height_high_velocity() {
        let p = fraction_to_point(0.0, 0.0, &[0.1, 1.0], &[0.5, 4.0]).expect("axes");
        assert_eq!((p.water_height, p.water_velocity), (0.1, 4.0));
        assert!(fraction_to_point(0.5, 0.5, &[], &[1.0]).is_none());
    }

    #[test]
    fn test_threshold_rows_find_first_crossing() {
        // 3 rows (velocity) x 2 cols (height), row-major.
        let values = [0.2, 0.1, 1.2, 0.5, 2.0, 0.9];
        assert_eq!(threshold_rows(&values, 3, 2), vec![(0, 1)]);
        assert!(threshold_rows(&values, 4, 2).is_empty());
    }
}
