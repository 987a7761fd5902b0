//! `movemotor` - execute one pulse sequence against a persisted position.
//!
//! Invocation mirrors the classic eight-argument contract:
//!
//! ```text
//! movemotor <DIRECTION_PIN> <PULSE_PIN> <DIRECTION> <POSITION_FILE> \
//!           <STEP_UNIT> <MAX_POSITION> <MIN_POSITION> <DELAYS>
//! ```
//!
//! Exits 0 on normal completion or a bounds-triggered stop, 1 on usage
//! errors, an unreadable or dirty position file, or a surfaced store
//! failure. Per-step timestamps are available at trace level
//! (`RUST_LOG=trace`).

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use rppal::gpio::Gpio;

use stepper_sequencer::error::{Error, MotionError};
use stepper_sequencer::{
    DelaySequence, FilePositionStore, Level, MonotonicClock, MotionController, MotionOutcome,
    MotionPlan, PositionStore, PulseDriver, SequencerConfig, SpinDelay, TravelBounds,
};

#[derive(Parser)]
#[command(name = "movemotor", about = "Drive a stepper motor through a timed pulse sequence")]
struct Args {
    /// BCM pin number of the direction output
    direction_pin: u8,

    /// BCM pin number of the pulse output
    pulse_pin: u8,

    /// Raw direction pin value (0 or 1)
    direction: u8,

    /// Path of the persisted position file
    position_file: PathBuf,

    /// Signed position delta applied per step
    step_unit: i64,

    /// Maximum allowed absolute position
    max_position: i64,

    /// Minimum allowed absolute position
    min_position: i64,

    /// Comma-separated full-period delays in microseconds, one per step
    delays: String,
}

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stdout)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    match run(args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("movemotor: {:#}", e);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<i32> {
    let direction =
        Level::from_bit(args.direction).context("direction must be 0 or 1")?;
    let delays: DelaySequence = args.delays.parse()?;
    let bounds = TravelBounds::new(args.min_position, args.max_position)?;
    let plan = MotionPlan::new(direction, args.step_unit, bounds)?;
    let config = SequencerConfig::default();

    let mut store = FilePositionStore::with_sentinel(
        &args.position_file,
        config.read_failure_sentinel,
    );

    // Report the recovered position before moving, as operators expect.
    // The controller revalidates the record itself.
    let record = store.load()?;
    if record.position != config.read_failure_sentinel {
        println!(
            "Current Position: {}{}",
            record.position,
            if record.dirty { " (dirty)" } else { "" }
        );
    }

    let gpio = Gpio::new().context("failed to open GPIO")?;
    let dir_pin = gpio
        .get(args.direction_pin)
        .with_context(|| format!("failed to claim direction pin {}", args.direction_pin))?
        .into_output();
    let pulse_pin = gpio
        .get(args.pulse_pin)
        .with_context(|| format!("failed to claim pulse pin {}", args.pulse_pin))?
        .into_output();

    let driver = PulseDriver::new(pulse_pin, dir_pin, SpinDelay::new());
    let mut controller =
        MotionController::new(driver, store, MonotonicClock::new(), config, plan)?;

    match controller.run(delays.as_slice()) {
        Ok(MotionOutcome::Completed { position }) => {
            println!("Movement finished. New Position {}", position);
            Ok(0)
        }
        Ok(MotionOutcome::OutOfBounds { .. }) => {
            println!("Position out of bounds");
            Ok(0)
        }
        Err(Error::Motion(MotionError::UnrecoveredDirty { .. })) => {
            println!("Position file is dirty, position must be zeroed");
            Ok(1)
        }
        Err(Error::Motion(MotionError::PositionUnreadable)) => {
            eprintln!("movemotor: failed to read position file, refusing to move");
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}
