//! Logging setup.
//!
//! Log lines go to `gdl.log` in the XDG state dir so stdout carries only
//! converted links. When that file can't be opened, `main` falls back to
//! [`init_logging_stderr`].

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used for the log file when `RUST_LOG` is unset.
const FILE_FILTER: &str = "info,gdl=debug,gdl_core=debug";
/// Filter used for stderr when `RUST_LOG` is unset.
const STDERR_FILTER: &str = "warn";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Path of the log file, creating the state directory if needed.
pub fn log_file_path() -> Result<PathBuf> {
    let state_dir = xdg::BaseDirectories::with_prefix("gdl")?.get_state_home();
    fs::create_dir_all(&state_dir)
        .with_context(|| format!("create log dir {}", state_dir.display()))?;
    Ok(state_dir.join("gdl.log"))
}

fn open_append(path: &Path) -> Result<File> {
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Install the file subscriber. Errors leave no subscriber installed.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_append(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_or(FILE_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("gdl logging initialized at {}", path.display());
    Ok(())
}

/// Install a stderr subscriber that shows warnings and errors only.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or(STDERR_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
