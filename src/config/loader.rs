//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SequencerConfig;

/// Load sequencer configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the
/// configuration fails validation.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SequencerConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse sequencer configuration from a TOML string.
///
/// Missing keys fall back to their defaults.
pub fn parse_config(content: &str) -> Result<SequencerConfig> {
    let config: SequencerConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    config.validate()?;

    Ok(config)
}
