use std::rc::Rc;

use gallery_host::{GalleryConfig, GalleryHost};

use crate::{WebConfigStore, WebDirectoryFetcher, WebHistoryBridge, WebSpawner};

/// Loads the effective configuration, falling back to defaults when the override is unusable.
///
/// The returned error, if any, describes why the stored override was ignored.
pub fn load_gallery_config() -> (GalleryConfig, Option<String>) {
    match WebConfigStore.load() {
        Ok(config) => (config, None),
        Err(err) => (GalleryConfig::default(), Some(err)),
    }
}

/// Builds the browser host bundle for `config`.
pub fn build_gallery_host(config: GalleryConfig) -> GalleryHost {
    GalleryHost {
        history: Rc::new(WebHistoryBridge),
        fetcher: Rc::new(WebDirectoryFetcher::new(config.listing_query.clone())),
        spawner: Rc::new(WebSpawner),
        config: Rc::new(config),
    }
}
