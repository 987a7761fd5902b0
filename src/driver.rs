//! Pulse generation for step/direction stepper drivers.
//!
//! Generic over embedded-hal 1.0 pin and delay types. The driver knows
//! nothing about position; it turns one delay value into one pulse cycle
//! and holds the direction pin constant for the whole sequence.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::error::{MotionError, Result};

/// Logic level for the direction pin.
///
/// The raw pin level is independent of the travel direction encoded in the
/// step unit's sign; wiring determines which level means which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Direction pin low (0).
    Low,
    /// Direction pin high (1).
    High,
}

impl Level {
    /// Interpret a 0/1 value as a pin level.
    ///
    /// Returns `None` for any other value.
    pub fn from_bit(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Low),
            1 => Some(Level::High),
            _ => None,
        }
    }
}

/// Pulse driver for a step/direction motor interface.
///
/// Generic over:
/// - `PULSE`: pulse (STEP) pin type (must implement `OutputPin`)
/// - `DIR`: direction pin type (must implement `OutputPin`)
/// - `DELAY`: delay provider (must implement `DelayNs`)
///
/// The delay provider must offer microsecond-level accuracy; the motor's
/// mechanical timing rides directly on these waits.
pub struct PulseDriver<PULSE, DIR, DELAY>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    pulse_pin: PULSE,
    dir_pin: DIR,
    delay: DELAY,
}

impl<PULSE, DIR, DELAY> PulseDriver<PULSE, DIR, DELAY>
where
    PULSE: OutputPin,
    DIR: OutputPin,
    DELAY: DelayNs,
{
    /// Create a driver from its pins and delay provider.
    ///
    /// Pins are assumed to already be configured as outputs by the
    /// surrounding process.
    pub fn new(pulse_pin: PULSE, dir_pin: DIR, delay: DELAY) -> Self {
        Self {
            pulse_pin,
            dir_pin,
            delay,
        }
    }

    /// Drive the direction pin.
    ///
    /// Called once before a pulse sequence begins; the level is held for
    /// the whole sequence.
    pub fn set_direction(&mut self, level: Level) -> Result<()> {
        match level {
            Level::High => self.dir_pin.set_high(),
            Level::Low => self.dir_pin.set_low(),
        }
        .map_err(|_| MotionError::PinError)?;
        Ok(())
    }

    /// Execute one pulse cycle for a full-period delay of `period_us`.
    ///
    /// Raises the pulse pin, waits half the period, lowers it, waits the
    /// other half. Odd periods lose the remainder microsecond to integer
    /// halving, matching the source hardware's behavior.
    pub fn step(&mut self, period_us: u32) -> Result<()> {
        let half = period_us / 2;

        self.pulse_pin.set_high().map_err(|_| MotionError::PinError)?;
        self.delay.delay_us(half);
        self.pulse_pin.set_low().map_err(|_| MotionError::PinError)?;
        self.delay.delay_us(half);
        Ok(())
    }

    /// Release the pins and delay provider.
    pub fn release(self) -> (PULSE, DIR, DELAY) {
        (self.pulse_pin, self.dir_pin, self.delay)
    }
}
