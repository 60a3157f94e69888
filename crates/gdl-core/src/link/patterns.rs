//! Compiled share-link patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// Domain marker that separates Drive links from everything else.
pub const DRIVE_DOMAIN: &str = "drive.google.com";

/// Prefix of every link produced by the converter.
pub const DIRECT_DOWNLOAD_PREFIX: &str = "https://drive.google.com/uc?export=download&id=";

/// `/file/d/<ID>` as found in "Share" links.
pub(super) static FILE_PATH_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/file/d/([a-zA-Z0-9_-]+)").expect("file path pattern is valid"));

/// `?id=<ID>` or `&id=<ID>` as found in `open?id=` and `uc?id=` links.
pub(super) static QUERY_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?&]id=([a-zA-Z0-9_-]+)").expect("query id pattern is valid"));

/// Returns the first capture group of `re` in `haystack`, if any.
pub(super) fn capture_id<'a>(re: &Regex, haystack: &'a str) -> Option<&'a str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_id_stops_at_first_non_id_char() {
        assert_eq!(
            capture_id(&FILE_PATH_ID, "/file/d/a-b_C9/view"),
            Some("a-b_C9")
        );
    }

    #[test]
    fn file_path_id_skips_empty_occurrence() {
        assert_eq!(
            capture_id(&FILE_PATH_ID, "/file/d//x/file/d/REAL"),
            Some("REAL")
        );
    }

    #[test]
    fn query_id_requires_separator() {
        assert_eq!(capture_id(&QUERY_ID, "https://x/?fid=abc"), None);
        assert_eq!(capture_id(&QUERY_ID, "https://x/?a=1&id=abc"), Some("abc"));
    }

    #[test]
    fn ids_are_ascii_only() {
        assert_eq!(capture_id(&QUERY_ID, "?id=caf\u{e9}"), Some("caf"));
        assert_eq!(capture_id(&QUERY_ID, "?id=\u{e9}"), None);
    }
}
