use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "swatchr=debug";

/// Returns the log file path inside the user's cache directory.
/// Falls back to `./swatchr.log` when no cache dir is found.
pub fn default_log_path() -> PathBuf {
    match dirs::cache_dir() {
        Some(cache_dir) => cache_dir.join("swatchr").join("swatchr.log"),
        None => PathBuf::from("swatchr.log"),
    }
}

/// Installs a file-backed subscriber. The terminal is never written to.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))
}
