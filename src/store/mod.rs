//! Durable position storage.
//!
//! The sequencer keeps a single persisted record of the motor's absolute
//! position plus a one-bit dirty marker. The marker is the crash-recovery
//! protocol: it is set before the first pulse of a move and cleared only
//! after the move completes with the motor stationary, so a set marker at
//! load time means the recorded position may not reflect reality.

mod record;
#[cfg(feature = "std")]
mod file;

pub use record::PersistedPosition;
#[cfg(feature = "std")]
pub use file::FilePositionStore;

use crate::error::Result;

/// Position value returned when the persisted record cannot be opened.
///
/// Reserved out-of-domain value; a loaded record carrying it (always paired
/// with `dirty = true`) tells the controller the position is unknown and
/// motion must be refused.
pub const READ_FAILURE_POSITION: i64 = -999_999;

/// Interface for loading and persisting the motor position record.
///
/// The controller is generic over this trait so tests can substitute
/// in-memory stores with failure injection. Implementations own read/write
/// access to the underlying record for the duration of one invocation;
/// concurrent writers are not supported.
pub trait PositionStore {
    /// Load the persisted record.
    ///
    /// An unreadable backing resource yields a record carrying the
    /// read-failure sentinel with `dirty = true` rather than an error;
    /// content that is present but malformed is an error.
    fn load(&mut self) -> Result<PersistedPosition>;

    /// Overwrite the persisted record.
    ///
    /// A record written by `store` and read back by `load` with no
    /// intervening crash must round-trip exactly.
    fn store(&mut self, record: &PersistedPosition) -> Result<()>;
}

impl<S: PositionStore + ?Sized> PositionStore for &mut S {
    fn load(&mut self) -> Result<PersistedPosition> {
        (**self).load()
    }

    fn store(&mut self, record: &PersistedPosition) -> Result<()> {
        (**self).store(record)
    }
}
