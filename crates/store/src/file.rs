//! JSON file store.
//!
//! A missing file reads as a high score of 0. Writes go to a sibling temp
//! file first and are renamed over the target, so a crash mid-write never
//! leaves a truncated document behind.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{paths, HighScoreStore, StoreError};

const FILE_VERSION: u32 = 1;

/// On-disk document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct HighScoreFile {
    #[serde(default = "default_version")]
    version: u32,
    high_score: u32,
}

fn default_version() -> u32 {
    FILE_VERSION
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn at_default_location() -> Result<Self, StoreError> {
        Ok(Self::new(paths::default_high_score_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.display_path(),
            source,
        }
    }
}

impl HighScoreStore for JsonFileStore {
    fn read_high_score(&self) -> Result<u32, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No high score file at {:?}, starting from 0", self.path);
                return Ok(0);
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let doc: HighScoreFile =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.display_path(),
                source,
            })?;
        Ok(doc.high_score)
    }

    fn write_high_score(&mut self, value: u32) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let doc = HighScoreFile {
            version: FILE_VERSION,
            high_score: value,
        };
        let content = serde_json::to_string_pretty(&doc).map_err(|source| {
            StoreError::Malformed {
                path: self.display_path(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        log::info!("Saved high score {} to {:?}", value, self.path);
        Ok(())
    }
}
