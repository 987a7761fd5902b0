//! Travel bounds for a motion invocation.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Allowed travel range in absolute step units, inclusive on both ends.
///
/// Supplied per invocation by the caller; positions have no intrinsic
/// bounds. Leaving the range is an expected stopping condition for the
/// controller, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TravelBounds {
    /// Minimum allowed position.
    #[serde(rename = "min_position")]
    pub min: i64,

    /// Maximum allowed position.
    #[serde(rename = "max_position")]
    pub max: i64,
}

impl TravelBounds {
    /// Create bounds, rejecting an inverted range.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(ConfigError::InvalidBounds { min, max }.into());
        }
        Ok(Self { min, max })
    }

    /// Check whether a position lies within the allowed range.
    #[inline]
    pub fn contains(&self, position: i64) -> bool {
        position >= self.min && position <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let bounds = TravelBounds::new(-10, 10).unwrap();

        assert!(bounds.contains(0));
        assert!(bounds.contains(-10));
        assert!(bounds.contains(10));
        assert!(!bounds.contains(11));
        assert!(!bounds.contains(-11));
    }

    #[test]
    fn single_point_range_is_valid() {
        let bounds = TravelBounds::new(5, 5).unwrap();
        assert!(bounds.contains(5));
        assert!(!bounds.contains(4));
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(TravelBounds::new(10, -10).is_err());
    }
}
