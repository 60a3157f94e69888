//! Bulk conversion of multi-line input.
//!
//! Lines are trimmed and blank lines dropped before numbering, so positions
//! in the report always run 1, 2, 3, ... over the surviving lines. Per-line
//! failures are outcomes in the report, not errors; only input with no
//! usable line at all fails.

mod report;

pub use report::{BatchEntry, BatchReport, ConversionOutcome};

use crate::link;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("No valid links found")]
    EmptyInput,
}

/// Trimmed, non-empty lines of `raw`, in order.
pub fn candidate_lines(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('\n').map(link::trim_input).filter(|l| !l.is_empty())
}

/// Classifies a single candidate line.
pub fn classify(line: &str) -> ConversionOutcome {
    if !link::is_drive_link(line) {
        return ConversionOutcome::NotADriveLink {
            original: line.to_string(),
        };
    }
    match link::convert(line) {
        Some(url) => ConversionOutcome::Converted { url },
        None => ConversionOutcome::Unrecognized {
            original: line.to_string(),
        },
    }
}

/// Converts every non-empty line of `raw` and collects an ordered report.
pub fn process_batch(raw: &str) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport::default();

    for line in candidate_lines(raw) {
        let outcome = classify(line);
        tracing::debug!(position = report.total + 1, ?outcome, "classified line");
        report.push(line.to_string(), outcome);
    }

    if report.total == 0 {
        return Err(BatchError::EmptyInput);
    }

    tracing::info!(
        success = report.success_count,
        failed = report.fail_count,
        total = report.total,
        "batch converted"
    );
    Ok(report)
}
