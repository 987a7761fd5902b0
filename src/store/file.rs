//! File-backed position store (std only).
//!
//! On-disk format: the position as a decimal integer in ASCII, immediately
//! followed by the literal `?` when dirty, with no other content. A
//! trailing newline is tolerated on read but never written.
//!
//! Writes go to a sibling temporary file which is fsynced and atomically
//! renamed over the target, so a crash mid-write can never leave a
//! truncated record that parses as a shorter, clean-looking position.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{PersistedPosition, PositionStore, READ_FAILURE_POSITION};
use crate::error::{Result, StoreError};

/// Position store backed by a single text file.
#[derive(Debug)]
pub struct FilePositionStore {
    path: PathBuf,
    sentinel: i64,
}

impl FilePositionStore {
    /// Create a store for the given path with the default read-failure
    /// sentinel.
    ///
    /// The file is not created here; a missing file surfaces at load time
    /// as the sentinel record.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_sentinel(path, READ_FAILURE_POSITION)
    }

    /// Create a store that reports a custom sentinel on read failure.
    ///
    /// The sentinel must match the one the controller validates against.
    pub fn with_sentinel<P: AsRef<Path>>(path: P, sentinel: i64) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sentinel,
        }
    }

    /// Path of the backing file.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn parse_record(content: &str) -> Result<PersistedPosition> {
        let corrupt = || {
            let mut excerpt = heapless::String::<64>::new();
            for c in content.trim_end().chars() {
                if excerpt.push(c).is_err() {
                    break;
                }
            }
            StoreError::CorruptRecord(excerpt)
        };

        let trimmed = content.trim();
        let (number, dirty) = match trimmed.strip_suffix('?') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };

        let position: i64 = number.parse().map_err(|_| corrupt())?;
        Ok(PersistedPosition { position, dirty })
    }
}

impl PositionStore for FilePositionStore {
    fn load(&mut self) -> Result<PersistedPosition> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to open position file {:?}: {}", self.path, e);
                return Ok(PersistedPosition::dirty(self.sentinel));
            }
        };
        Ok(Self::parse_record(&content)?)
    }

    fn store(&mut self, record: &PersistedPosition) -> Result<()> {
        let io_err = |e: std::io::Error| {
            StoreError::WriteFailed(
                heapless::String::try_from(e.to_string().as_str()).unwrap_or_default(),
            )
        };

        let marker = if record.dirty { "?" } else { "" };
        let tmp = self.tmp_path();

        let write_and_rename = || -> std::io::Result<()> {
            let mut file = fs::File::create(&tmp)?;
            write!(file, "{}{}", record.position, marker)?;
            file.sync_all()?;
            fs::rename(&tmp, &self.path)
        };

        write_and_rename().map_err(|e| {
            let _ = fs::remove_file(&tmp);
            io_err(e)
        })?;
        Ok(())
    }
}
