//! Monotonic time and calibrated delay providers.
//!
//! The controller only needs two capabilities from its environment: "read a
//! monotonic microsecond clock" and "delay for N microseconds with bounded
//! jitter". The clock is a crate trait so tests can inject a fake time
//! source; the delay side reuses `embedded_hal::delay::DelayNs`.

/// Monotonic microsecond clock.
///
/// Only differences between readings are meaningful; the epoch is
/// unspecified. Implementations must never go backwards.
pub trait Clock {
    /// Current reading in microseconds.
    fn now_us(&mut self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &mut C {
    fn now_us(&mut self) -> u64 {
        (**self).now_us()
    }
}

/// Clock backed by `std::time::Instant`.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl MonotonicClock {
    /// Create a clock with its origin at the current instant.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for MonotonicClock {
    fn now_us(&mut self) -> u64 {
        self.origin.elapsed().as_micros() as u64
    }
}

/// Spin-sleeping delay provider with microsecond accuracy.
///
/// An ordinary `thread::sleep` has millisecond-level granularity, which is
/// unsuitable for step timing. `spin_sleep` sleeps for the bulk of the
/// interval and busy-waits the remainder.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SpinDelay {
    sleeper: spin_sleep::SpinSleeper,
}

#[cfg(feature = "std")]
impl SpinDelay {
    /// Create a delay provider with the platform's native accuracy.
    pub fn new() -> Self {
        Self {
            sleeper: spin_sleep::SpinSleeper::default(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for SpinDelay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl embedded_hal::delay::DelayNs for SpinDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleeper.sleep(core::time::Duration::from_nanos(ns as u64));
    }
}
