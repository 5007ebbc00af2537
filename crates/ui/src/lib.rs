use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod controls_panel;
pub mod diagnostics_panel;
pub mod force_chart;
pub mod heatmap_panel;
pub mod menu_bar;
pub mod share_preview;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<controls_panel::VehicleDraft>()
            .init_resource::<force_chart::ForceChartVisible>()
            .init_resource::<diagnostics_panel::DiagnosticsVisible>()
            .init_resource::<share_preview::SharePreviewVisible>()
            .init_resource::<heatmap_panel::HeatmapTextures>()
            .add_systems(Startup, theme::apply_flood_theme)
            .add_systems(
                Update,
                (
                    // Panels claim screen space in order; the central panel
                    // takes what is left, so it runs last.
                    menu_bar::menu_bar_ui,
                    controls_panel::controls_panel_ui,
                    force_chart::force_chart_ui,
                    diagnostics_panel::diagnostics_panel_ui,
                    share_preview::share_preview_ui,
                    heatmap_panel::heatmap_panel_ui,
                )
                    .chain()
                    .after(rendering::rebuild_heatmap_images),
            );
    }
}
