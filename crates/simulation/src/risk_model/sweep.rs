//! Uniform sample ranges for the height/velocity risk grid.

use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_HEIGHT_MAX, DEFAULT_HEIGHT_MIN, DEFAULT_SWEEP_SAMPLES, DEFAULT_VELOCITY_MAX,
    DEFAULT_VELOCITY_MIN,
};
use crate::risk_error::{GridAxis, InvalidGridError};

/// `samples` evenly spaced values from `start` to `end`, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

impl SweepRange {
    pub fn new(start: f64, end: f64, samples: usize) -> Self {
        Self {
            start,
            end,
            samples,
        }
    }

    /// Check that the range can be sampled into a non-empty sequence.
    pub fn validate(&self, axis: GridAxis) -> Result<(), InvalidGridError> {
        if self.samples == 0 {
            return Err(match axis {
                GridAxis::Height => InvalidGridError::EmptyHeights,
                GridAxis::Velocity => InvalidGridError::EmptyVelocities,
            });
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(InvalidGridError::InvalidRange {
                axis,
                reason: format!("has non-finite bounds [{}, {}]", self.start, self.end),
            });
        }
        if self.end < self.start {
            return Err(InvalidGridError::InvalidRange {
                axis,
                reason: format!("end {} is below start {}", self.end, self.start),
            });
        }
        Ok(())
    }

    /// Sample the range. A single sample yields `start`.
    pub fn values(&self) -> Vec<f64> {
        match self.samples {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                let step = (self.end - self.start) / (n - 1) as f64;
                let mut out: Vec<f64> = (0..n).map(|i| self.start + step * i as f64).collect();
                // Pin the last sample so accumulated rounding never overshoots.
                out[n - 1] = self.end;
                out
            }
        }
    }

    /// Distance between adjacent samples (0 for a single sample).
    pub fn step(&self) -> f64 {
        if self.samples < 2 {
            0.0
        } else {
            (self.end - self.start) / (self.samples - 1) as f64
        }
    }
}

/// Height and velocity sampling for a risk map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Water heights (m), the column axis.
    pub heights: SweepRange,
    /// Water velocities (m/s), the row axis.
    pub velocities: SweepRange,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            heights: SweepRange::new(DEFAULT_HEIGHT_MIN, DEFAULT_HEIGHT_MAX, DEFAULT_SWEEP_SAMPLES),
            velocities: SweepRange::new(
                DEFAULT_VELOCITY_MIN,
                DEFAULT_VELOCITY_MAX,
                DEFAULT_SWEEP_SAMPLES,
            ),
        }
    }
}

impl SweepConfig {
    /// Default bounds with both sample counts replaced.
    pub fn with_samples(samples: usize) -> Self {
        let mut config = Self::default();
        config.heights.samples = samples;
        config.velocities.samples = samples;
        config
    }

    pub fn validate(&self) -> Result<(), InvalidGridError> {
        self.heights.validate(GridAxis::Height)?;
        self.velocities.validate(GridAxis::Velocity)
    }
}
