//! The persisted position record.

/// Durable record of the motor's absolute position.
///
/// `dirty` set means the last recorded write was not known to correspond to
/// a stationary motor; the position value may be stale or unreliable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistedPosition {
    /// Absolute motor position in step units.
    pub position: i64,
    /// Whether a move was in progress when this record was written.
    pub dirty: bool,
}

impl PersistedPosition {
    /// Record for a stationary motor.
    #[inline]
    pub fn clean(position: i64) -> Self {
        Self {
            position,
            dirty: false,
        }
    }

    /// Record for a motor that is (or was) in motion.
    #[inline]
    pub fn dirty(position: i64) -> Self {
        Self {
            position,
            dirty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_dirty_bit() {
        assert_eq!(
            PersistedPosition::clean(42),
            PersistedPosition {
                position: 42,
                dirty: false
            }
        );
        assert_eq!(
            PersistedPosition::dirty(-7),
            PersistedPosition {
                position: -7,
                dirty: true
            }
        );
    }
}
