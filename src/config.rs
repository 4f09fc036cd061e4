//! Runtime configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::store::{HighScoreStore, JsonFileStore, MemoryStore};

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit high-score file; `None` means the per-user default.
    pub high_score_path: Option<PathBuf>,
    /// Keep the high score in memory only.
    pub no_save: bool,
    /// Seed for food placement.
    pub seed: u32,
    /// Log file; logging is off when unset.
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            high_score_path: None,
            no_save: false,
            seed: time_seed(),
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from `SNAKE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let high_score_path = non_empty("SNAKE_HIGH_SCORE_PATH").map(PathBuf::from);

        let no_save = non_empty("SNAKE_NO_SAVE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let seed = non_empty("SNAKE_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(time_seed);

        let log_path = non_empty("SNAKE_LOG_PATH").map(PathBuf::from);

        Self {
            high_score_path,
            no_save,
            seed,
            log_path,
        }
    }

    /// Build the high-score store this configuration asks for.
    ///
    /// Falls back to an in-memory store when no per-user directory exists.
    pub fn open_store(&self) -> Box<dyn HighScoreStore> {
        if self.no_save {
            log::info!("High score persistence disabled");
            return Box::new(MemoryStore::new());
        }

        if let Some(path) = &self.high_score_path {
            return Box::new(JsonFileStore::new(path.clone()));
        }

        match JsonFileStore::at_default_location() {
            Ok(store) => {
                log::debug!("High score file: {}", store.path().display());
                Box::new(store)
            }
            Err(e) => {
                log::warn!("{}; keeping the high score in memory", e);
                Box::new(MemoryStore::new())
            }
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
