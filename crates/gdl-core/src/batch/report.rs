//! Batch report types and their text rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of classifying and converting one candidate line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// Direct-download URL produced by the converter.
    Converted { url: String },
    /// Mentions the Drive domain but no share-link pattern matched.
    Unrecognized { original: String },
    /// Does not mention the Drive domain at all.
    NotADriveLink { original: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }
}

/// One numbered line of a batch report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// 1-based position among the non-empty input lines.
    pub position: usize,
    /// The trimmed input line.
    pub line: String,
    pub outcome: ConversionOutcome,
}

impl fmt::Display for BatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            ConversionOutcome::Converted { url } => write!(f, "{}. {}", self.position, url),
            ConversionOutcome::Unrecognized { original } => {
                write!(f, "{}. [FAILED] {}", self.position, original)
            }
            ConversionOutcome::NotADriveLink { original } => {
                write!(f, "{}. [INVALID] {}", self.position, original)
            }
        }
    }
}

/// Ordered per-line outcomes plus summary counts.
///
/// `success_count + fail_count == total == entries.len()` always holds for
/// reports built by [`super::process_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub entries: Vec<BatchEntry>,
    pub success_count: usize,
    pub fail_count: usize,
    pub total: usize,
}

impl BatchReport {
    /// Appends the next entry and updates the counters.
    pub(super) fn push(&mut self, line: String, outcome: ConversionOutcome) {
        if outcome.is_success() {
            self.success_count += 1;
        } else {
            self.fail_count += 1;
        }
        self.total += 1;
        self.entries.push(BatchEntry {
            position: self.total,
            line,
            outcome,
        });
    }

    /// Converted URLs only, in input order.
    pub fn converted_urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            ConversionOutcome::Converted { url } => Some(url.as_str()),
            _ => None,
        })
    }

    /// One `"<position>. <payload>"` line per entry, newline separated.
    pub fn render_text(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn summary(&self) -> String {
        format!(
            "{} successful, {} failed out of {} total links",
            self.success_count, self.fail_count, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BatchReport {
        let mut r = BatchReport::default();
        r.push(
            "https://drive.google.com/open?id=A".into(),
            ConversionOutcome::Converted {
                url: "https://drive.google.com/uc?export=download&id=A".into(),
            },
        );
        r.push(
            "https://drive.google.com/drive/my-drive".into(),
            ConversionOutcome::Unrecognized {
                original: "https://drive.google.com/drive/my-drive".into(),
            },
        );
        r.push(
            "hello".into(),
            ConversionOutcome::NotADriveLink {
                original: "hello".into(),
            },
        );
        r
    }

    #[test]
    fn push_numbers_and_counts() {
        let r = sample();
        let positions: Vec<usize> = r.entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(r.success_count, 1);
        assert_eq!(r.fail_count, 2);
        assert_eq!(r.total, 3);
    }

    #[test]
    fn render_text_format() {
        assert_eq!(
            sample().render_text(),
            "1. https://drive.google.com/uc?export=download&id=A\n\
             2. [FAILED] https://drive.google.com/drive/my-drive\n\
             3. [INVALID] hello"
        );
    }

    #[test]
    fn summary_format() {
        assert_eq!(
            sample().summary(),
            "1 successful, 2 failed out of 3 total links"
        );
    }

    #[test]
    fn converted_urls_filters_failures() {
        let r = sample();
        let urls: Vec<&str> = r.converted_urls().collect();
        assert_eq!(urls, vec!["https://drive.google.com/uc?export=download&id=A"]);
    }

    #[test]
    fn serializes_outcome_tag() {
        let json = serde_json::to_value(&sample()).unwrap();
        assert_eq!(json["entries"][0]["outcome"]["outcome"], "converted");
        assert_eq!(json["entries"][2]["outcome"]["outcome"], "not_a_drive_link");
        assert_eq!(json["total"], 3);
    }
}
