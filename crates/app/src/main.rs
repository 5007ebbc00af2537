use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use simulation::risk_model::{RiskInputs, SweepConfig};

#[cfg(not(target_arch = "wasm32"))]
mod agent_mode;

/// Overrides both sweep sample counts, for machines where a 200 x 200 grid
/// makes the sliders lag.
const SWEEP_SAMPLES_ENV: &str = "FLOODRISK_SWEEP_SAMPLES";

fn parse_sweep_samples(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(format!("{SWEEP_SAMPLES_ENV} must be at least 1")),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("{SWEEP_SAMPLES_ENV}={raw:?} is not a count: {e}")),
    }
}

/// Initial model inputs, honoring the sweep override when it parses.
pub(crate) fn initial_inputs() -> (RiskInputs, Option<String>) {
    let mut inputs = RiskInputs::default();
    let Ok(raw) = std::env::var(SWEEP_SAMPLES_ENV) else {
        return (inputs, None);
    };
    match parse_sweep_samples(&raw) {
        Ok(n) => {
            inputs.sweep = SweepConfig::with_samples(n);
            (inputs, None)
        }
        Err(message) => (inputs, Some(message)),
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if std::env::args().skip(1).any(|arg| arg == "--agent") {
            agent_mode::run_agent_mode();
            return;
        }
    }

    let (inputs, env_error) = initial_inputs();

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Flood Vehicle Risk".to_string(),
            resolution: (1440.0, 860.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        simulation::SimulationPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ))
    .insert_resource(inputs);

    if let Some(message) = env_error {
        warn!("{message}; using the default sweep");
    }
    info!(
        "Sweep resolution {}x{}",
        inputs.sweep.velocities.samples, inputs.sweep.heights.samples
    );

    app.run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sweep_samples() {
        assert_eq!(parse_sweep_samples("64"), Ok(64));
        assert_eq!(parse_sweep_samples(" 120\n"), Ok(120));
        assert!(parse_sweep_samples("0").is_err());
        assert!(parse_sweep_samples("lots").is_err());
        assert!(parse_sweep_samples("-5").is_err());
    }
}
