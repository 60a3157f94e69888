//! Link conversion: Google Drive share links to direct-download links.
//!
//! The converter is a text-pattern rewriter, not a validator. It does not
//! parse the URL, check the scheme or host, or contact Drive. Patterns are
//! tried in a fixed order and the first match wins:
//!
//! 1. `/file/d/<ID>` (share links such as `.../file/d/<ID>/view?usp=sharing`)
//! 2. `?id=<ID>` or `&id=<ID>` (`open?id=` links and direct links)
//! 3. links that already contain `drive.google.com/uc?` and `export=download`
//!    are returned unchanged

mod patterns;

pub use patterns::{DIRECT_DOWNLOAD_PREFIX, DRIVE_DOMAIN};

use patterns::{capture_id, FILE_PATH_ID, QUERY_ID};

/// Why a single link could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SingleLinkError {
    #[error("Please paste a Google Drive link")]
    EmptyInput,
    #[error("Invalid Google Drive link. Please make sure you're using a valid Google Drive share link.")]
    Unrecognized,
}

/// Trims whitespace and byte-order marks from both ends.
///
/// `str::trim` leaves U+FEFF in place, which shows up at the start of pasted
/// text and files saved by some editors.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Builds the direct-download URL for a file ID.
pub fn direct_download_url(file_id: &str) -> String {
    format!("{DIRECT_DOWNLOAD_PREFIX}{file_id}")
}

/// Returns true if `line` mentions the Drive domain anywhere.
pub fn is_drive_link(line: &str) -> bool {
    line.contains(DRIVE_DOMAIN)
}

/// Converts a Drive share link into a direct-download link.
///
/// Returns `None` when no known pattern matches. Leading and trailing
/// whitespace is ignored. The function is idempotent on its own output.
///
/// # Examples
///
/// - `convert("https://drive.google.com/file/d/ABC/view")` → `Some("https://drive.google.com/uc?export=download&id=ABC")`
/// - `convert("https://drive.google.com/open?id=XYZ")` → `Some("https://drive.google.com/uc?export=download&id=XYZ")`
/// - `convert("not a link")` → `None`
pub fn convert(url: &str) -> Option<String> {
    let url = trim_input(url);

    if let Some(id) = capture_id(&FILE_PATH_ID, url) {
        return Some(direct_download_url(id));
    }

    if let Some(id) = capture_id(&QUERY_ID, url) {
        return Some(direct_download_url(id));
    }

    if url.contains("drive.google.com/uc?") && url.contains("export=download") {
        return Some(url.to_string());
    }

    None
}

/// Converts one user-supplied link, distinguishing empty input from an
/// unrecognized link.
pub fn convert_single(input: &str) -> Result<String, SingleLinkError> {
    let input = trim_input(input);
    if input.is_empty() {
        return Err(SingleLinkError::EmptyInput);
    }
    convert(input).ok_or(SingleLinkError::Unrecognized)
}
