//! Path helpers shared by the fetcher, the history bridge and the views.
//!
//! Paths are the browser-visible `location.pathname` values: slash-delimited, starting with `/`,
//! with segments kept in their URI-encoded wire form. Decoding only happens for display.

use percent_encoding::percent_decode_str;

/// The root directory path.
pub const ROOT_PATH: &str = "/";

/// Returns the prefix used when joining child names onto `path`.
///
/// One trailing `/` is stripped, so the root path yields an empty prefix and `/a/` yields `/a`.
pub fn entry_prefix(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// Builds the path of `filename` inside the directory at `path`.
pub fn child_path(path: &str, filename: &str) -> String {
    format!("{}/{filename}", entry_prefix(path))
}

/// Builds the directory-listing request URL for `path`.
pub fn listing_url(path: &str, query: &str) -> String {
    format!("{path}?{query}")
}

/// Builds the thumbnail request URL for `filename` inside `path`.
pub fn thumbnail_url(path: &str, filename: &str, query: &str) -> String {
    format!("{}?{query}", child_path(path, filename))
}

/// Percent-decodes a single path segment for display.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn decode_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}
