/// High-score persistence.
///
/// The score file holds a single 4-byte big-endian signed integer with no
/// header.  Reading never fails from the caller's point of view: a missing
/// or unreadable file counts as a high score of 0.  Writing is
/// fire-and-forget; failures are logged and the in-memory value stays
/// authoritative.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File name used when no explicit path is configured.
pub const DEFAULT_FILE_NAME: &str = ".snake_highscore.dat";

/// Where the high score lives: `$HOME/.snake_highscore.dat`, or the current
/// directory when `HOME` is unset.
pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(DEFAULT_FILE_NAME)
}

pub trait ScoreStore {
    /// Stored high score, or 0 if none can be read.
    fn load(&self) -> u32;
    /// Overwrite the stored high score.  Never reports failure.
    fn save(&mut self, value: u32);
}

// ── File store ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ScoreFileError {
    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} holds {len} bytes, need 4", .path.display())]
    Truncated { path: PathBuf, len: usize },
    #[error("{} holds a negative score ({value})", .path.display())]
    Negative { path: PathBuf, value: i32 },
    #[error("score {0} does not fit in a signed 32-bit integer")]
    OutOfRange(u32),
}

#[derive(Clone, Debug)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored score.  Bytes past the first four are ignored.
    pub fn try_load(&self) -> Result<u32, ScoreFileError> {
        let bytes = fs::read(&self.path).map_err(|source| ScoreFileError::Read {
            path: self.path.clone(),
            source,
        })?;
        let word: [u8; 4] = bytes
            .get(..4)
            .and_then(|b| <[u8; 4]>::try_from(b).ok())
            .ok_or_else(|| ScoreFileError::Truncated {
                path: self.path.clone(),
                len: bytes.len(),
            })?;
        let value = i32::from_be_bytes(word);
        u32::try_from(value).map_err(|_| ScoreFileError::Negative {
            path: self.path.clone(),
            value,
        })
    }

    pub fn try_save(&self, value: u32) -> Result<(), ScoreFileError> {
        let value = i32::try_from(value).map_err(|_| ScoreFileError::OutOfRange(value))?;
        fs::write(&self.path, value.to_be_bytes()).map_err(|source| ScoreFileError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match self.try_load() {
            Ok(value) => {
                tracing::debug!(path = %self.path.display(), value, "loaded high score");
                value
            }
            Err(ScoreFileError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no high score file yet");
                0
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable high score file");
                0
            }
        }
    }

    fn save(&mut self, value: u32) {
        if let Err(err) = self.try_save(value) {
            tracing::warn!(error = %err, value, "could not save high score");
        }
    }
}

// ── In-memory store ───────────────────────────────────────────────────────────

/// Keeps the score for the lifetime of the process only.
#[derive(Clone, Debug, Default)]
pub struct MemoryScoreStore {
    value: u32,
    /// Number of `save` calls seen.
    pub saves: usize,
}

impl MemoryScoreStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.value
    }

    fn save(&mut self, value: u32) {
        self.value = value;
        self.saves += 1;
    }
}
