//! High score persistence.
//!
//! The engine only needs to read and write one integer. This crate defines
//! that capability as [`HighScoreStore`] and ships two implementations:
//!
//! - [`MemoryStore`]: process-local, for tests and hosts that opt out of saving
//! - [`JsonFileStore`]: durable JSON file, `{"version": 1, "high_score": 12}`
//!
//! Stores are constructed by the host and injected into the engine; nothing
//! here is global.

pub mod file;
pub mod memory;
pub mod paths;

use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors that can occur while reading or writing the high score.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying file could not be read or written.
    #[error("high score I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored document is not valid.
    #[error("high score file {path} is malformed: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// No platform config directory to default to.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// The store refuses the operation (read-only or detached stores).
    #[error("high score store unavailable: {0}")]
    Unavailable(String),
}

/// Get/set capability for the best score.
pub trait HighScoreStore {
    fn read_high_score(&self) -> Result<u32, StoreError>;

    fn write_high_score(&mut self, value: u32) -> Result<(), StoreError>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn read_high_score(&self) -> Result<u32, StoreError> {
        (**self).read_high_score()
    }

    fn write_high_score(&mut self, value: u32) -> Result<(), StoreError> {
        (**self).write_high_score(value)
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn read_high_score(&self) -> Result<u32, StoreError> {
        (**self).read_high_score()
    }

    fn write_high_score(&mut self, value: u32) -> Result<(), StoreError> {
        (**self).write_high_score(value)
    }
}
