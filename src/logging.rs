//! File logging for the terminal binary.
//!
//! The game owns the terminal while it runs, so log lines never go to
//! stdout/stderr. With no log path configured the logger is not installed and
//! every `log` macro is a no-op.

use std::fs::{self, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Install `env_logger` writing to `path`. Level comes from `RUST_LOG`
/// (default `info`).
///
/// Returns whether a logger was installed.
pub fn init(path: Option<&Path>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already installed")?;

    log::info!("Logging to {}", path.display());
    Ok(true)
}
