//! Saving a rendered batch report to a dated text file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// File name prefix used when the config does not set one.
pub const DEFAULT_EXPORT_PREFIX: &str = "google-drive-links";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    #[error("No results to download")]
    NoResults,
}

/// `<prefix>-<YYYY-MM-DD>.txt`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{}-{}.txt", prefix, date.format("%Y-%m-%d"))
}

/// Current local date, as used in export file names.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Writes `content` to `dir/<prefix>-<today>.txt`, creating `dir` if needed.
pub fn write_report(dir: &Path, prefix: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(export_file_name(prefix, today()));
    write_report_to(&path, content)?;
    Ok(path)
}

/// Writes `content` to exactly `path`. Empty content is refused.
pub fn write_report_to(path: &Path, content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(ExportError::NoResults.into());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("write {}", path.display()))?;
    tracing::info!("saved report to {}", path.display());
    Ok(())
}
