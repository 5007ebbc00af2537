//! Headless `--agent` mode: a blocking synchronous loop that reads JSON
//! commands from stdin and writes JSON responses to stdout.
//!
//! When the `--agent` CLI flag is passed, the window, rendering and UI
//! plugins are skipped. Grid requests go through the same `RiskInputs` /
//! `RiskOutputs` resources the interactive app uses.
//!
//! ## Protocol
//!
//! Each line of stdin is a JSON object with a `"cmd"` discriminator.
//! Each line of stdout is a JSON response with `"protocol_version"` and
//! `"type"` fields. See [`simulation::agent_protocol`] for the full schema.

use std::io::{BufRead, Write};

use bevy::prelude::*;

use simulation::agent_protocol::{
    grid_payload, make_response, AgentCommand, AgentResponse, ResponsePayload, PROTOCOL_VERSION,
};
use simulation::risk_model::{evaluate_point, Diagnosis, RiskInputs, RiskOutputs, SweepConfig};

fn send(out: &mut impl Write, response: &AgentResponse) {
    match serde_json::to_string(response) {
        Ok(json) => {
            let _ = writeln!(out, "{json}");
            let _ = out.flush();
        }
        Err(e) => eprintln!("failed to encode response: {e}"),
    }
}

pub fn run_agent_mode() {
    let (inputs, env_error) = crate::initial_inputs();
    if let Some(message) = env_error {
        eprintln!("{message}; using the default sweep");
    }

    // Each grid request without its own sweep falls back to this one.
    let default_sweep = inputs.sweep;

    // -- Headless app: model only, no window --------------------------------
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(simulation::SimulationPlugin);
    app.insert_resource(inputs);

    // -- I/O setup -----------------------------------------------------------
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    send(&mut stdout, &make_response(ResponsePayload::Ready));

    // Log to stderr so it does not interfere with the JSON protocol on stdout.
    eprintln!(
        "floodrisk agent mode v{} ready, waiting for commands on stdin",
        PROTOCOL_VERSION
    );

    // -- Main command loop ---------------------------------------------------
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let cmd: AgentCommand = match serde_json::from_str(&line) {
            Ok(c) => c,
            Err(e) => {
                let resp = make_response(ResponsePayload::Error {
                    message: format!("Parse error: {e}"),
                });
                send(&mut stdout, &resp);
                continue;
            }
        };

        let response = process_command(cmd, &mut app, &default_sweep);
        let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);

        send(&mut stdout, &response);

        if is_goodbye {
            break;
        }
    }

    eprintln!("floodrisk agent mode shutting down");
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

fn process_command(
    cmd: AgentCommand,
    app: &mut App,
    default_sweep: &SweepConfig,
) -> AgentResponse {
    match cmd {
        AgentCommand::Defaults => {
            let inputs = RiskInputs::default();
            make_response(ResponsePayload::Defaults {
                vehicle: inputs.vehicle,
                point: inputs.point,
                sweep: *default_sweep,
            })
        }

        AgentCommand::EvaluatePoint { vehicle, point } => {
            let vehicle = vehicle.unwrap_or_default();
            let balance = evaluate_point(&vehicle, point);
            make_response(ResponsePayload::PointResult {
                diagnosis: Diagnosis::from_balance(&balance),
                balance,
            })
        }

        AgentCommand::EvaluateGrid {
            vehicle,
            sweep,
            include_values,
        } => {
            {
                let mut inputs = app.world_mut().resource_mut::<RiskInputs>();
                inputs.vehicle = vehicle.unwrap_or_default();
                inputs.sweep = sweep.unwrap_or(*default_sweep);
            }

            // One tick runs the recompute system on the new inputs.
            app.update();

            let outputs = app.world().resource::<RiskOutputs>();
            match (&outputs.field, &outputs.grid_error) {
                (Some(field), _) => make_response(grid_payload(field, include_values)),
                (None, Some(err)) => make_response(ResponsePayload::Error {
                    message: err.to_string(),
                }),
                (None, None) => make_response(ResponsePayload::Error {
                    message: "risk grid was not evaluated".to_string(),
                }),
            }
        }

        AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}
