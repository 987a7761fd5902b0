//! Integration tests for stepper-sequencer.
//!
//! These exercise the complete workflow from delay parsing through motion
//! execution against a real position file, with mocked GPIO and an
//! injected clock.

use std::fs;
use std::path::Path;

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use proptest::prelude::*;

use stepper_sequencer::error::{Error, MotionError, StoreError};
use stepper_sequencer::{
    Clock, DelaySequence, FilePositionStore, Level, MotionController, MotionOutcome, MotionPlan,
    PersistedPosition, PositionStore, PulseDriver, SequencerConfig, TravelBounds,
};

// =============================================================================
// Test doubles
// =============================================================================

/// Clock advancing a fixed amount per reading.
struct TickClock {
    now: u64,
    tick: u64,
}

impl TickClock {
    fn new(tick: u64) -> Self {
        Self { now: 0, tick }
    }
}

impl Clock for TickClock {
    fn now_us(&mut self) -> u64 {
        let now = self.now;
        self.now += self.tick;
        now
    }
}

fn pulse_transactions(steps: usize) -> Vec<PinTransaction> {
    let mut transactions = Vec::new();
    for _ in 0..steps {
        transactions.push(PinTransaction::set(PinState::High));
        transactions.push(PinTransaction::set(PinState::Low));
    }
    transactions
}

fn controller_for(
    path: &Path,
    expected_steps: usize,
    direction: Level,
    step_unit: i64,
    min: i64,
    max: i64,
) -> MotionController<PinMock, PinMock, NoopDelay, FilePositionStore, TickClock> {
    let pulse = PinMock::new(&pulse_transactions(expected_steps));
    let dir = if expected_steps > 0 {
        PinMock::new(&[PinTransaction::set(match direction {
            Level::High => PinState::High,
            Level::Low => PinState::Low,
        })])
    } else {
        PinMock::new(&[])
    };

    let driver = PulseDriver::new(pulse, dir, NoopDelay::new());
    let store = FilePositionStore::new(path);
    let plan =
        MotionPlan::new(direction, step_unit, TravelBounds::new(min, max).unwrap()).unwrap();

    MotionController::new(driver, store, TickClock::new(10), SequencerConfig::default(), plan)
        .unwrap()
}

fn finish(
    ctl: MotionController<PinMock, PinMock, NoopDelay, FilePositionStore, TickClock>,
) {
    let (driver, _, _) = ctl.release();
    let (mut pulse, mut dir, _) = driver.release();
    pulse.done();
    dir.done();
}

// =============================================================================
// Full-run workflows against a real position file
// =============================================================================

#[test]
fn complete_run_persists_clean_final_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currentPosition.txt");
    fs::write(&path, "100").unwrap();

    let delays: DelaySequence = "1000,1000,1000,1000".parse().unwrap();
    let mut ctl = controller_for(&path, 4, Level::High, 3, -10_000, 10_000);

    let outcome = ctl.run(delays.as_slice()).unwrap();
    assert_eq!(outcome, MotionOutcome::Completed { position: 112 });

    finish(ctl);
    assert_eq!(fs::read_to_string(&path).unwrap(), "112");
}

#[test]
fn bounds_stop_persists_dirty_position() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currentPosition.txt");
    fs::write(&path, "0").unwrap();

    // Step unit 5 with max 10: halts on the third step at 15, the fourth
    // delay is never executed.
    let delays: DelaySequence = "1000,1000,1000,1000".parse().unwrap();
    let mut ctl = controller_for(&path, 3, Level::High, 5, -10, 10);

    let outcome = ctl.run(delays.as_slice()).unwrap();
    assert_eq!(outcome, MotionOutcome::OutOfBounds { position: 15 });

    finish(ctl);
    assert_eq!(fs::read_to_string(&path).unwrap(), "15?");
}

#[test]
fn dirty_file_rejects_motion_with_zero_pulses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currentPosition.txt");
    fs::write(&path, "250?").unwrap();

    let mut ctl = controller_for(&path, 0, Level::High, 1, -10_000, 10_000);

    let err = ctl.run(&[1000, 1000]).unwrap_err();
    assert_eq!(
        err,
        Error::Motion(MotionError::UnrecoveredDirty { position: 250 })
    );

    finish(ctl);
    // The record is untouched; recovery stays an explicit external step.
    assert_eq!(fs::read_to_string(&path).unwrap(), "250?");
}

#[test]
fn missing_file_rejects_motion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currentPosition.txt");

    let mut ctl = controller_for(&path, 0, Level::High, 1, -10_000, 10_000);

    let err = ctl.run(&[1000]).unwrap_err();
    assert_eq!(err, Error::Motion(MotionError::PositionUnreadable));
    finish(ctl);
}

#[test]
fn corrupt_file_is_surfaced_not_moved_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currentPosition.txt");
    fs::write(&path, "12garbage").unwrap();

    let mut ctl = controller_for(&path, 0, Level::High, 1, -10_000, 10_000);

    let err = ctl.run(&[1000]).unwrap_err();
    assert!(matches!(err, Error::Store(StoreError::CorruptRecord(_))));
    finish(ctl);
}

#[test]
fn interrupted_move_is_detected_on_next_invocation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("currentPosition.txt");
    fs::write(&path, "0").unwrap();

    // First invocation stops out of bounds, leaving the record dirty.
    let mut first = controller_for(&path, 2, Level::High, 6, -10, 10);
    let outcome = first.run(&[1000, 1000, 1000]).unwrap();
    assert_eq!(outcome, MotionOutcome::OutOfBounds { position: 12 });
    finish(first);

    // The next invocation must refuse to move until re-zeroed.
    let mut second = controller_for(&path, 0, Level::High, 1, -10_000, 10_000);
    assert_eq!(
        second.run(&[1000]).unwrap_err(),
        Error::Motion(MotionError::UnrecoveredDirty { position: 12 })
    );
    finish(second);

    // External recovery: zero the file, motion works again.
    fs::write(&path, "0").unwrap();
    let mut third = controller_for(&path, 1, Level::High, 1, -10_000, 10_000);
    assert_eq!(
        third.run(&[1000]).unwrap(),
        MotionOutcome::Completed { position: 1 }
    );
    finish(third);
}

// =============================================================================
// Store round-trip property
// =============================================================================

proptest! {
    #[test]
    fn store_round_trips_any_record(position in any::<i64>(), dirty in any::<bool>()) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FilePositionStore::new(dir.path().join("pos.txt"));

        let record = PersistedPosition { position, dirty };
        store.store(&record).unwrap();
        prop_assert_eq!(store.load().unwrap(), record);
    }

    #[test]
    fn parser_accepts_any_delay_list(delays in proptest::collection::vec(any::<u32>(), 1..64)) {
        let joined = delays
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let parsed: DelaySequence = joined.parse().unwrap();
        prop_assert_eq!(parsed.as_slice(), delays.as_slice());
    }
}
