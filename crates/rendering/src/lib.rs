use bevy::prelude::*;

use simulation::config::{BUOYANCY_RATIO_CEILING, DRAG_RATIO_CEILING};
use simulation::risk_model::RiskOutputs;

pub mod camera;
pub mod color_ramps;
pub mod heatmap;
pub mod share_card;

use color_ramps::HeatmapPalette;
use heatmap::{heatmap_pixels, HeatmapImage};
use share_card::{ShareChart, ShareFormat, DEFAULT_HANDLE};

/// User-selectable heatmap appearance.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeatmapStyle {
    pub palette: HeatmapPalette,
}

/// Colorized risk fields, rebuilt whenever the model output or the palette
/// changes.
#[derive(Resource, Debug, Default)]
pub struct HeatmapImages {
    /// `RiskOutputs::revision` the images were built from.
    pub revision: u64,
    pub palette: HeatmapPalette,
    pub drag: HeatmapImage,
    pub buoyancy: HeatmapImage,
}

/// Options for the share-card preview.
#[derive(Resource, Debug, Clone)]
pub struct ShareCardSettings {
    pub format: ShareFormat,
    pub chart: ShareChart,
    pub handle: String,
    pub show_logo: bool,
}

impl Default for ShareCardSettings {
    fn default() -> Self {
        Self {
            format: ShareFormat::default(),
            chart: ShareChart::default(),
            handle: DEFAULT_HANDLE.to_string(),
            show_logo: false,
        }
    }
}

pub fn rebuild_heatmap_images(
    outputs: Res<RiskOutputs>,
    style: Res<HeatmapStyle>,
    mut images: ResMut<HeatmapImages>,
) {
    if images.revision == outputs.revision && images.palette == style.palette {
        return;
    }

    let palette = style.palette;
    let (drag, buoyancy) = match outputs.field.as_ref() {
        Some(field) => (
            heatmap_pixels(
                field.drag_over_friction(),
                field.rows(),
                field.cols(),
                palette.drag_ramp(),
                DRAG_RATIO_CEILING,
            ),
            heatmap_pixels(
                field.buoyancy_over_weight(),
                field.rows(),
                field.cols(),
                palette.buoyancy_ramp(),
                BUOYANCY_RATIO_CEILING,
            ),
        ),
        None => (HeatmapImage::default(), HeatmapImage::default()),
    };

    debug!(
        "Heatmaps rebuilt for revision {} ({}x{}, {})",
        outputs.revision,
        drag.width,
        drag.height,
        palette.label()
    );

    *images = HeatmapImages {
        revision: outputs.revision,
        palette,
        drag,
        buoyancy,
    };
}

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(camera::clear_color())
            .init_resource::<HeatmapStyle>()
            .init_resource::<HeatmapImages>()
            .init_resource::<ShareCardSettings>()
            .add_systems(Startup, camera::setup_camera)
            .add_systems(
                Update,
                rebuild_heatmap_images.after(simulation::risk_model::recompute_risk),
            );
    }
}
