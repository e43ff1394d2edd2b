//! `localStorage`-backed configuration overrides.

use gallery_host::{GalleryConfig, GALLERY_CONFIG_KEY};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Reads [`GalleryConfig`] overrides stored under [`GALLERY_CONFIG_KEY`].
pub struct WebConfigStore;

impl WebConfigStore {
    /// Loads the raw JSON override, if one is stored.
    ///
    /// # Errors
    ///
    /// Returns an error when localStorage is present but cannot be read.
    pub fn load_json(self) -> Result<Option<String>, String> {
        bridge::load_local_storage(GALLERY_CONFIG_KEY)
    }

    /// Loads the effective configuration: defaults merged with any stored override.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored override cannot be read or parsed.
    pub fn load(self) -> Result<GalleryConfig, String> {
        match self.load_json()? {
            Some(raw) => GalleryConfig::from_json(&raw),
            None => Ok(GalleryConfig::default()),
        }
    }
}
