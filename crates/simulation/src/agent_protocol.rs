//! Agent text protocol types for the `--agent` headless mode.
//!
//! External programs (scripts, notebooks, test harnesses) drive the risk model
//! over newline-delimited JSON on stdin/stdout. These types live in the
//! `simulation` crate so they can be unit-tested without the app binary; the
//! I/O loop lives in `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::risk_model::{Diagnosis, ForceBalance, RiskField, RiskSummary, SweepConfig};
use crate::vehicle::{OperatingPoint, VehicleParams};

// ---------------------------------------------------------------------------
// Commands (stdin → simulation)
// ---------------------------------------------------------------------------

/// A single command read from one line of stdin, tagged by `cmd`.
///
/// `vehicle` records are validated while parsing, so an out-of-range mass or
/// width surfaces as a parse error naming the field.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Report the reference vehicle, operating point, and sweep.
    #[serde(rename = "defaults")]
    Defaults,

    /// Evaluate the force balance at one operating point.
    #[serde(rename = "evaluate_point")]
    EvaluatePoint {
        #[serde(default)]
        vehicle: Option<VehicleParams>,
        point: OperatingPoint,
    },

    /// Evaluate the risk grid. Values are only included on request since a
    /// default sweep is 40 000 nodes per field.
    #[serde(rename = "evaluate_grid")]
    EvaluateGrid {
        #[serde(default)]
        vehicle: Option<VehicleParams>,
        #[serde(default)]
        sweep: Option<SweepConfig>,
        #[serde(default)]
        include_values: bool,
    },

    /// End the session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (simulation → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Tagged payload variants for agent responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    /// The model is ready to accept commands.
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "defaults")]
    Defaults {
        vehicle: VehicleParams,
        point: OperatingPoint,
        sweep: SweepConfig,
    },

    /// Result of `evaluate_point`.
    #[serde(rename = "force_balance")]
    PointResult {
        balance: ForceBalance,
        diagnosis: Diagnosis,
    },

    /// Result of `evaluate_grid`. Values are row-major, rows = velocities.
    #[serde(rename = "risk_field")]
    GridResult {
        rows: usize,
        cols: usize,
        summary: RiskSummary,
        #[serde(skip_serializing_if = "Option::is_none")]
        drag_over_friction: Option<Vec<f64>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        buoyancy_over_weight: Option<Vec<f64>>,
    },

    #[serde(rename = "error")]
    Error { message: String },

    /// The session is ending (response to `quit`).
    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

/// Build a `risk_field` payload, copying the raw values only when asked.
pub fn grid_payload(field: &RiskField, include_values: bool) -> ResponsePayload {
    let (rows, cols) = field.shape();
    ResponsePayload::GridResult {
        rows,
        cols,
        summary: field.summary(),
        drag_over_friction: include_values.then(|| field.drag_over_friction().to_vec()),
        buoyancy_over_weight: include_values.then(|| field.buoyancy_over_weight().to_vec()),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
