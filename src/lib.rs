//! # stepper-sequencer
//!
//! Crash-safe stepper motor pulse sequencing with durable absolute position.
//!
//! ## Features
//!
//! - **Precise pulse timing**: caller-supplied per-step delays executed
//!   through `embedded-hal 1.0` `OutputPin`/`DelayNs` with microsecond
//!   accuracy
//! - **Durable position**: the absolute position survives process exits and
//!   power loss in a single text file
//! - **Two-phase commit**: a dirty marker is persisted before the first
//!   pulse and cleared only on full, uninterrupted completion, so a crash
//!   mid-move is detected on the next invocation
//! - **Bounds enforcement**: motion halts (and checkpoints) the moment the
//!   position leaves the caller-supplied travel range
//! - **no_std compatible**: driver, controller and storage seams work
//!   without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stepper_sequencer::{
//!     DelaySequence, FilePositionStore, Level, MotionController, MotionPlan,
//!     MonotonicClock, PulseDriver, SequencerConfig, SpinDelay, TravelBounds,
//! };
//!
//! let delays: DelaySequence = "1500,1500,1500".parse()?;
//! let driver = PulseDriver::new(pulse_pin, dir_pin, SpinDelay::new());
//! let store = FilePositionStore::new("/home/pi/currentPosition.txt");
//! let plan = MotionPlan::new(Level::High, 1, TravelBounds::new(-4000, 4000)?)?;
//!
//! let mut controller = MotionController::new(
//!     driver,
//!     store,
//!     MonotonicClock::new(),
//!     SequencerConfig::default(),
//!     plan,
//! )?;
//! let outcome = controller.run(delays.as_slice())?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): file-backed store, TOML config, host time sources
//! - `alloc`: heap allocation for no_std with allocator
//! - `raspi`: the `movemotor` binary with rppal GPIO

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod controller;
#[cfg(any(feature = "std", feature = "alloc"))]
pub mod delays;
pub mod driver;
pub mod error;
pub mod store;
pub mod time;

// Re-exports for ergonomic API
pub use config::{MotionPlan, SequencerConfig, TravelBounds, DEFAULT_CHECKPOINT_INTERVAL_US};
pub use controller::{MotionController, MotionOutcome, MotionPhase, MotionSession};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use delays::DelaySequence;
pub use driver::{Level, PulseDriver};
pub use error::{Error, Result};
pub use store::{PersistedPosition, PositionStore, READ_FAILURE_POSITION};
pub use time::Clock;

// Host time sources (std only)
#[cfg(feature = "std")]
pub use store::FilePositionStore;
#[cfg(feature = "std")]
pub use time::{MonotonicClock, SpinDelay};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;
