//! Error types for stepper-sequencer.
//!
//! Provides unified error handling across parsing, position storage, and
//! motion execution.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all stepper-sequencer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Delay list parsing error
    Parse(ParseError),
    /// Position store error
    Store(StoreError),
    /// Motion validation or execution error
    Motion(MotionError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Checkpoint interval must be non-zero
    InvalidCheckpointInterval(u64),
    /// Travel bounds are inverted (min must be <= max)
    InvalidBounds {
        /// Minimum allowed position
        min: i64,
        /// Maximum allowed position
        max: i64,
    },
    /// Step unit must be non-zero (its sign encodes travel direction)
    ZeroStepUnit,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Delay list parsing errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token in the comma-separated list is not a valid delay value
    InvalidDelay(heapless::String<32>),
}

/// Position store errors.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Persisted record does not parse as `<integer>` with optional `?`
    CorruptRecord(heapless::String<64>),
    /// Writing the record failed (std only)
    #[cfg(feature = "std")]
    WriteFailed(heapless::String<128>),
}

/// Motion validation and execution errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotionError {
    /// Position file was unreadable; the loaded record carries the
    /// read-failure sentinel and the motor must not move
    PositionUnreadable,
    /// Persisted record is dirty from a prior incomplete move; the
    /// position must be re-zeroed externally before motion resumes
    UnrecoveredDirty {
        /// Position recorded by the interrupted move
        position: i64,
    },
    /// GPIO pin operation failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Parse(e) => write!(f, "Parse error: {}", e),
            Error::Store(e) => write!(f, "Store error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidCheckpointInterval(v) => {
                write!(f, "Invalid checkpoint interval: {} us. Must be > 0", v)
            }
            ConfigError::InvalidBounds { min, max } => {
                write!(f, "Invalid travel bounds: min ({}) must be <= max ({})", min, max)
            }
            ConfigError::ZeroStepUnit => write!(f, "Step unit must be non-zero"),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidDelay(token) => {
                write!(f, "Invalid delay value: '{}'", token)
            }
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::CorruptRecord(content) => {
                write!(f, "Corrupt position record: '{}'", content)
            }
            #[cfg(feature = "std")]
            StoreError::WriteFailed(msg) => write!(f, "Position write failed: {}", msg),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::PositionUnreadable => {
                write!(f, "Position file unreadable, refusing to move")
            }
            MotionError::UnrecoveredDirty { position } => {
                write!(
                    f,
                    "Position file is dirty at {}, position must be zeroed",
                    position
                )
            }
            MotionError::PinError => write!(f, "GPIO pin operation failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Parse(e)
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Store(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(feature = "std")]
impl std::error::Error for StoreError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}
