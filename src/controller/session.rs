//! Per-invocation motion session state.

/// Phase of a motion invocation.
///
/// Transitions run `Validating → InMotion → {Completed | OutOfBounds}`;
/// validation failures never enter `InMotion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    /// Loaded record is being checked before any pin is touched.
    Validating,
    /// Pulse sequence is executing with the dirty marker persisted.
    InMotion,
    /// Full sequence consumed; dirty marker cleared.
    Completed,
    /// Travel bounds left mid-sequence; dirty marker still set.
    OutOfBounds,
}

/// In-memory state for one motion invocation.
///
/// Owned exclusively by the controller and discarded when the invocation
/// ends; nothing here is persisted directly.
#[derive(Debug, Clone, Copy)]
pub struct MotionSession {
    position: i64,
    steps_taken: u32,
    last_checkpoint_us: u64,
    phase: MotionPhase,
}

impl MotionSession {
    /// Start a session at a validated position.
    ///
    /// The intent-to-move write counts as the first checkpoint, so the
    /// cadence timer starts at `now_us`.
    pub fn begin(position: i64, now_us: u64) -> Self {
        Self {
            position,
            steps_taken: 0,
            last_checkpoint_us: now_us,
            phase: MotionPhase::InMotion,
        }
    }

    /// Current in-memory position.
    #[inline]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Steps executed so far this invocation.
    #[inline]
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Apply one step's position delta.
    #[inline]
    pub fn advance(&mut self, step_unit: i64) {
        self.position += step_unit;
        self.steps_taken += 1;
    }

    /// Whether the checkpoint interval has elapsed since the last
    /// successful checkpoint.
    #[inline]
    pub fn checkpoint_due(&self, now_us: u64, interval_us: u64) -> bool {
        now_us.saturating_sub(self.last_checkpoint_us) > interval_us
    }

    /// Restart the cadence timer after a successful checkpoint.
    #[inline]
    pub fn mark_checkpoint(&mut self, now_us: u64) {
        self.last_checkpoint_us = now_us;
    }

    /// Enter a terminal phase.
    #[inline]
    pub fn finish(&mut self, phase: MotionPhase) {
        self.phase = phase;
    }
}
