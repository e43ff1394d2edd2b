//! Directory-listing data types and the listing error taxonomy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One child of a directory as reported by the listing endpoint.
pub struct DirectoryEntry {
    /// Base name of the entry, as stored on the server.
    pub filename: String,
    /// Whether the entry is a directory.
    #[serde(rename = "isDir")]
    pub is_dir: bool,
    /// Last-modified time in unix milliseconds, when the server reports it.
    #[serde(default, rename = "mtime", skip_serializing_if = "Option::is_none")]
    pub modified_at_unix_ms: Option<i64>,
}

impl DirectoryEntry {
    /// Creates a directory entry.
    pub fn directory(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            is_dir: true,
            modified_at_unix_ms: None,
        }
    }

    /// Creates a file entry.
    pub fn file(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            is_dir: false,
            modified_at_unix_ms: None,
        }
    }

    /// Returns `true` for dot-prefixed names, which are never displayed.
    pub fn is_hidden(&self) -> bool {
        self.filename.starts_with('.')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure loading a directory listing.
///
/// All variants are handled the same way by the listing view; the `Display` text is what the
/// user sees in place of the listing.
pub enum ListingError {
    /// The listing endpoint could not be reached.
    #[error("failed to fetch {url}: {message}")]
    Fetch {
        /// Request URL.
        url: String,
        /// Transport-reported reason.
        message: String,
    },
    /// The listing endpoint answered with a non-success status.
    #[error("{url} responded with HTTP {status}")]
    Response {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body was not a JSON directory listing.
    #[error("invalid directory listing from {url}: {message}")]
    Decode {
        /// Request URL.
        url: String,
        /// Parser-reported reason.
        message: String,
    },
}

impl ListingError {
    /// Returns the request URL the error refers to.
    pub fn url(&self) -> &str {
        match self {
            Self::Fetch { url, .. } | Self::Response { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}

/// Parses a listing response body fetched from `url`.
///
/// # Errors
///
/// Returns [`ListingError::Decode`] when `body` is not a JSON array of entries.
pub fn decode_listing(url: &str, body: &str) -> Result<Vec<DirectoryEntry>, ListingError> {
    serde_json::from_str(body).map_err(|err| ListingError::Decode {
        url: url.to_string(),
        message: err.to_string(),
    })
}
