use bevy::prelude::*;

/// Behind the egui panels; matches the theme's darkest fill.
pub const BACKGROUND: Color = Color::srgb(0.118, 0.125, 0.157);

pub fn clear_color() -> ClearColor {
    ClearColor(BACKGROUND)
}

/// egui draws on top of the primary window's camera, so one 2D camera is
/// all the scene needs.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Main Camera")));
}
