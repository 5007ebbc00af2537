// ---------------------------------------------------------------------------
// Risk model error types
// ---------------------------------------------------------------------------

use std::fmt;

/// A vehicle parameter was outside its physical domain.
///
/// Raised when building a [`crate::vehicle::VehicleParams`]; the model itself
/// never fails once it holds a validated record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationError {
    /// Name of the offending field, e.g. `"mass"`.
    pub field: &'static str,
    /// The rejected value.
    pub value: f64,
    /// Human-readable constraint the value violated, e.g. `"> 0"`.
    pub requirement: &'static str,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid vehicle configuration: {} = {} (must be {})",
            self.field, self.value, self.requirement
        )
    }
}

impl std::error::Error for ConfigurationError {}

/// Which axis of a sweep grid was degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    Height,
    Velocity,
}

impl GridAxis {
    pub fn name(self) -> &'static str {
        match self {
            GridAxis::Height => "height",
            GridAxis::Velocity => "velocity",
        }
    }
}

/// A risk grid could not be built from the requested samples.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidGridError {
    /// No water-height samples were supplied.
    EmptyHeights,
    /// No water-velocity samples were supplied.
    EmptyVelocities,
    /// A sweep range could not be sampled (non-finite or reversed bounds).
    InvalidRange { axis: GridAxis, reason: String },
}

impl fmt::Display for InvalidGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGridError::EmptyHeights => write!(f, "Invalid grid: no height samples"),
            InvalidGridError::EmptyVelocities => write!(f, "Invalid grid: no velocity samples"),
            InvalidGridError::InvalidRange { axis, reason } => {
                write!(f, "Invalid grid: {} range {reason}", axis.name())
            }
        }
    }
}

impl std::error::Error for InvalidGridError {}
