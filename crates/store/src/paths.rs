//! Data file locations
//!
//! Uses XDG directories via `dirs`:
//! - Linux: `~/.config/tui-snake/`
//! - macOS: `~/Library/Application Support/tui-snake/`
//! - Windows: `%APPDATA%\tui-snake\`

use std::path::PathBuf;

use crate::StoreError;

const APP_NAME: &str = "tui-snake";
const HIGH_SCORE_FILE: &str = "high-score.json";

/// Application config directory (not created here).
pub fn config_dir() -> Result<PathBuf, StoreError> {
    let base = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
    Ok(base.join(APP_NAME))
}

/// Default location of the high score file.
pub fn default_high_score_path() -> Result<PathBuf, StoreError> {
    Ok(config_dir()?.join(HIGH_SCORE_FILE))
}
