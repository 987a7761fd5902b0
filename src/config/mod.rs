//! Configuration for the pulse sequencer.
//!
//! Provides the sequencer's tunable values with explicit defaults, the
//! per-invocation motion plan, and TOML loading (with the `std` feature).

mod bounds;
#[cfg(feature = "std")]
mod loader;

pub use bounds::TravelBounds;
#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

use serde::Deserialize;

use crate::driver::Level;
use crate::error::{ConfigError, Result};
use crate::store::READ_FAILURE_POSITION;

/// Default interval between durable position checkpoints while in motion.
pub const DEFAULT_CHECKPOINT_INTERVAL_US: u64 = 50_000;

/// Tunable sequencer values.
///
/// Injected into the controller rather than hard-coded so tests can shrink
/// the checkpoint interval and exercise the cadence logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Microseconds between durable checkpoints during motion.
    pub checkpoint_interval_us: u64,

    /// Position value a store reports when its backing record is
    /// unreadable. Must lie outside the travel range of any real motor.
    pub read_failure_sentinel: i64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval_us: DEFAULT_CHECKPOINT_INTERVAL_US,
            read_failure_sentinel: READ_FAILURE_POSITION,
        }
    }
}

impl SequencerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.checkpoint_interval_us == 0 {
            return Err(
                ConfigError::InvalidCheckpointInterval(self.checkpoint_interval_us).into(),
            );
        }
        Ok(())
    }
}

/// Per-invocation motion parameters.
///
/// The raw direction pin level and the signed step unit are independent:
/// wiring decides what the pin level means, while the step unit's sign is
/// what actually moves the tracked position up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPlan {
    /// Level to drive the direction pin to for this move.
    pub direction: Level,

    /// Signed position delta applied per pulse.
    pub step_unit: i64,

    /// Allowed travel range for this move.
    pub bounds: TravelBounds,
}

impl MotionPlan {
    /// Create a plan, rejecting a zero step unit.
    ///
    /// A zero step unit would let the motor spin forever without the
    /// position or the bounds check ever changing.
    pub fn new(direction: Level, step_unit: i64, bounds: TravelBounds) -> Result<Self> {
        if step_unit == 0 {
            return Err(ConfigError::ZeroStepUnit.into());
        }
        Ok(Self {
            direction,
            step_unit,
            bounds,
        })
    }
}
