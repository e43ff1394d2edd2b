//! Client configuration model.

use serde::{Deserialize, Serialize};

/// localStorage key holding optional JSON overrides for [`GalleryConfig`].
pub const GALLERY_CONFIG_KEY: &str = "gallery.config.v1";
/// Query string appended to a directory path to request its JSON listing.
pub const DEFAULT_LISTING_QUERY: &str = "json=true";
/// Query string appended to a file path to request its scaled preview.
pub const DEFAULT_THUMBNAIL_QUERY: &str = "thumbnail=true";
/// Static asset rendered for directory entries.
pub const DEFAULT_FOLDER_ICON_SRC: &str = "/_static/images/folder-icon.svg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tunables for the gallery views.
///
/// Missing fields in a stored override fall back to their defaults.
pub struct GalleryConfig {
    /// Query string used for directory-listing requests.
    pub listing_query: String,
    /// Query string used for thumbnail requests.
    pub thumbnail_query: String,
    /// Image source used for the folder icon.
    pub folder_icon_src: String,
    /// Label of the root breadcrumb link.
    pub home_label: String,
    /// Drop listing results that arrive after a newer request was issued.
    ///
    /// Off by default: the most recently resolved response is rendered even when it belongs to an
    /// older navigation.
    pub discard_stale_listings: bool,
    /// Log every location-driven path change.
    pub trace_navigation: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            listing_query: DEFAULT_LISTING_QUERY.to_string(),
            thumbnail_query: DEFAULT_THUMBNAIL_QUERY.to_string(),
            folder_icon_src: DEFAULT_FOLDER_ICON_SRC.to_string(),
            home_label: "Home".to_string(),
            discard_stale_listings: false,
            trace_navigation: false,
        }
    }
}

impl GalleryConfig {
    /// Parses a JSON override object on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw_json` is not a JSON object with correctly typed fields.
    pub fn from_json(raw_json: &str) -> Result<Self, String> {
        serde_json::from_str(raw_json).map_err(|err| format!("invalid gallery config: {err}"))
    }
}
