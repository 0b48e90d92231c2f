//! High score persistence
//!
//! A single JSON record `{"high_score": N}` on disk. Loading and saving never
//! fail from the caller's point of view: errors are logged and mapped to a
//! default, so a broken score file can't stop a game.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// On-disk high score record. Unknown keys are ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_score: Option<u64>,
}

impl HighScoreRecord {
    pub fn new(high_score: u64) -> Self {
        Self {
            high_score: Some(high_score),
        }
    }

    /// Stored score, 0 when the field is absent or null
    pub fn score(&self) -> u64 {
        self.high_score.unwrap_or(0)
    }
}

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed high score record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create the parent directory of `path` if it has one
fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Read the high score from `path`. A missing file is `Ok(0)`.
pub fn read_high_score(path: &Path) -> Result<u64, HighScoreError> {
    ensure_parent_dir(path)?;

    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let record: HighScoreRecord = serde_json::from_str(&json)?;
    Ok(record.score())
}

/// Overwrite `path` with a record holding `value`
pub fn write_high_score(path: &Path, value: u64) -> Result<(), HighScoreError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string(&HighScoreRecord::new(value))?;
    fs::write(path, json)?;
    Ok(())
}

/// Load the high score, falling back to 0 on any error
pub fn load_high_score(path: &Path) -> u64 {
    match read_high_score(path) {
        Ok(score) => {
            log::info!("Loaded high score {} from {}", score, path.display());
            score
        }
        Err(e) => {
            log::warn!("Could not load high score from {}: {}", path.display(), e);
            0
        }
    }
}

/// Save the high score. Returns false (after logging) if the write failed.
pub fn save_high_score(path: &Path, value: u64) -> bool {
    match write_high_score(path, value) {
        Ok(()) => {
            log::info!("High score {} saved to {}", value, path.display());
            true
        }
        Err(e) => {
            log::warn!("Could not save high score to {}: {}", path.display(), e);
            false
        }
    }
}
