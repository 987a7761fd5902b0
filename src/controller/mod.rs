//! Motion orchestration.
//!
//! The controller ties the position store, the pulse driver and the clock
//! together into a crash-safe move:
//!
//! 1. Load the persisted record and refuse to move if it is unreadable or
//!    still dirty from an unrecovered crash.
//! 2. Persist `dirty = true` before the first pulse (intent to move).
//! 3. Per step: pulse, apply the step unit to the in-memory position,
//!    checkpoint at the configured cadence (still dirty), stop early on a
//!    bounds violation.
//! 4. On full completion, persist the final position with the dirty marker
//!    cleared.
//!
//! A position persisted with the marker set is therefore always an
//! understatement or overstatement of at most the steps since the last
//! checkpoint, and a clean record always describes a stationary motor.

mod session;

pub use session::{MotionPhase, MotionSession};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{info, trace, warn};

use crate::config::{MotionPlan, SequencerConfig};
use crate::driver::PulseDriver;
use crate::error::{MotionError, Result};
use crate::store::{PersistedPosition, PositionStore};
use crate::time::Clock;

/// Terminal outcome of a successful motion invocation.
///
/// A bounds violation is an expected stopping condition, not an error; both
/// variants map to a success exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionOutcome {
    /// Full delay sequence consumed; persisted record is clean.
    Completed {
        /// Final absolute position.
        position: i64,
    },
    /// Travel bounds left mid-sequence; persisted record is still dirty
    /// and the position must be re-zeroed before further motion.
    OutOfBounds {
        /// Position at which the sequence halted.
        position: i64,
    },
}

impl MotionOutcome {
    /// Final position regardless of how the sequence ended.
    #[inline]
    pub fn position(&self) -> i64 {
        match *self {
            MotionOutcome::Completed { position } => position,
            MotionOutcome::OutOfBounds { position } => position,
        }
    }
}

/// Orchestrates one pulse sequence against a persisted position.
///
/// Generic over:
/// - `PULSE`, `DIR`, `DELAY`: hardware types of the underlying
///   [`PulseDriver`]
/// - `STORE`: durable position storage (must implement [`PositionStore`])
/// - `CLOCK`: monotonic microsecond time source (must implement [`Clock`])
pub struct MotionController<PULSE, DIR, DELAY, STORE, CLOCK>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    STORE: PositionStore,
    CLOCK: Clock,
{
    driver: PulseDriver<PULSE, DIR, DELAY>,
    store: STORE,
    clock: CLOCK,
    config: SequencerConfig,
    plan: MotionPlan,
}

impl<PULSE, DIR, DELAY, STORE, CLOCK> MotionController<PULSE, DIR, DELAY, STORE, CLOCK>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
    STORE: PositionStore,
    CLOCK: Clock,
{
    /// Create a controller.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn new(
        driver: PulseDriver<PULSE, DIR, DELAY>,
        store: STORE,
        clock: CLOCK,
        config: SequencerConfig,
        plan: MotionPlan,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            driver,
            store,
            clock,
            config,
            plan,
        })
    }

    /// Execute one pulse sequence, one delay per step.
    ///
    /// Returns the terminal outcome, or an error if the recovered position
    /// is unusable or an authoritative store write fails. Cadence
    /// checkpoint failures are logged and swallowed; aborting a physically
    /// in-progress move over a transient storage hiccup would be worse
    /// than losing one checkpoint.
    pub fn run(&mut self, delays: &[u32]) -> Result<MotionOutcome> {
        let record = self.validate()?;
        info!("Current position: {}", record.position);

        // Intent-to-move commit. The motor has not moved yet, so a write
        // failure here is fatal rather than swallowed.
        self.store.store(&PersistedPosition::dirty(record.position))?;

        self.driver.set_direction(self.plan.direction)?;

        let mut session = MotionSession::begin(record.position, self.clock.now_us());

        for (index, &period_us) in delays.iter().enumerate() {
            self.driver.step(period_us)?;
            session.advance(self.plan.step_unit);

            let now = self.clock.now_us();
            trace!("step {} at {} us, position {}", index, now, session.position());

            if session.checkpoint_due(now, self.config.checkpoint_interval_us) {
                match self.store.store(&PersistedPosition::dirty(session.position())) {
                    Ok(()) => session.mark_checkpoint(now),
                    Err(e) => warn!("Checkpoint write failed, motion continues: {}", e),
                }
            }

            if !self.plan.bounds.contains(session.position()) {
                // The halt position is authoritative: surface a failure to
                // record it, unlike the cadence checkpoints above.
                self.store.store(&PersistedPosition::dirty(session.position()))?;
                session.finish(MotionPhase::OutOfBounds);
                info!(
                    "Position {} out of bounds after {} steps",
                    session.position(),
                    session.steps_taken()
                );
                return Ok(MotionOutcome::OutOfBounds {
                    position: session.position(),
                });
            }
        }

        self.store
            .store(&PersistedPosition::clean(session.position()))?;
        session.finish(MotionPhase::Completed);
        info!(
            "Movement finished at position {} after {} steps",
            session.position(),
            session.steps_taken()
        );
        Ok(MotionOutcome::Completed {
            position: session.position(),
        })
    }

    /// Load and validate the persisted record without touching any pin.
    fn validate(&mut self) -> Result<PersistedPosition> {
        let record = self.store.load()?;
        if record.position == self.config.read_failure_sentinel {
            return Err(MotionError::PositionUnreadable.into());
        }
        if record.dirty {
            return Err(MotionError::UnrecoveredDirty {
                position: record.position,
            }
            .into());
        }
        Ok(record)
    }

    /// Release the hardware, store and clock.
    pub fn release(self) -> (PulseDriver<PULSE, DIR, DELAY>, STORE, CLOCK) {
        (self.driver, self.store, self.clock)
    }
}
