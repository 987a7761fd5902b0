//! Delay list parsing.
//!
//! A motion invocation supplies one full-period delay (in microseconds) per
//! motor step as a comma-separated list. The list is parsed up front and is
//! immutable for the rest of the run; its length is the number of steps to
//! execute.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

use core::str::FromStr;

use crate::error::{Error, ParseError};

/// Ordered sequence of full-period step delays in microseconds.
///
/// One entry per motor step. No magnitude validation is performed here;
/// callers are responsible for supplying delays the motor can follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelaySequence(Vec<u32>);

impl DelaySequence {
    /// Number of steps in the sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence contains no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The delays as a slice, in step order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Iterate over the delays in step order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, u32> {
        self.0.iter()
    }
}

impl From<Vec<u32>> for DelaySequence {
    fn from(delays: Vec<u32>) -> Self {
        Self(delays)
    }
}

impl FromStr for DelaySequence {
    type Err = Error;

    /// Parse a comma-separated delay list such as `"100,200,300"`.
    ///
    /// Tokens are trimmed of surrounding whitespace before parsing. Any
    /// token that does not parse as a `u32` (including an empty token)
    /// yields [`ParseError::InvalidDelay`] carrying the token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut delays = Vec::new();
        for token in s.split(',') {
            let token = token.trim();
            let value: u32 = token.parse().map_err(|_| {
                ParseError::InvalidDelay(heapless::String::try_from(token).unwrap_or_default())
            })?;
            delays.push(value);
        }
        Ok(Self(delays))
    }
}

impl<'a> IntoIterator for &'a DelaySequence {
    type Item = &'a u32;
    type IntoIter = core::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordered_list() {
        let seq: DelaySequence = "100,200,300".parse().unwrap();
        assert_eq!(seq.as_slice(), &[100, 200, 300]);
        assert_eq!(seq.len(), 3);
    }

    #[test]
    fn parses_single_value() {
        let seq: DelaySequence = "1500".parse().unwrap();
        assert_eq!(seq.as_slice(), &[1500]);
    }

    #[test]
    fn tolerates_token_whitespace() {
        let seq: DelaySequence = "100, 200 ,300".parse().unwrap();
        assert_eq!(seq.as_slice(), &[100, 200, 300]);
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = "100,abc,300".parse::<DelaySequence>().unwrap_err();
        match err {
            Error::Parse(ParseError::InvalidDelay(token)) => {
                assert_eq!(token.as_str(), "abc");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!("".parse::<DelaySequence>().is_err());
    }

    #[test]
    fn rejects_trailing_comma() {
        // "100," splits into a trailing empty token
        assert!("100,".parse::<DelaySequence>().is_err());
    }

    #[test]
    fn rejects_negative_delay() {
        assert!("100,-200".parse::<DelaySequence>().is_err());
    }
}
