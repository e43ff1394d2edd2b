//! Injected host-service bundle.

use std::rc::Rc;

use futures::task::LocalSpawn;

use crate::{
    DirectoryFetcher, GalleryConfig, HistoryBridge, MemoryDirectoryFetcher, MemoryHistory,
};

/// Host services handed to the gallery views by the entry layer.
///
/// All environment-specific selection happens before this bundle is built, which keeps
/// `gallery_ui` free of browser adapter types.
#[derive(Clone)]
pub struct GalleryHost {
    /// Navigation primitives and location-change notifications.
    pub history: Rc<dyn HistoryBridge>,
    /// Directory-listing transport.
    pub fetcher: Rc<dyn DirectoryFetcher>,
    /// Executor for listing requests.
    pub spawner: Rc<dyn LocalSpawn>,
    /// View configuration.
    pub config: Rc<GalleryConfig>,
}

impl GalleryHost {
    /// Builds a host backed by in-memory history and listings, starting at `path`.
    pub fn memory(
        path: &str,
        fetcher: MemoryDirectoryFetcher,
        spawner: Rc<dyn LocalSpawn>,
    ) -> (Self, MemoryHistory) {
        let history = MemoryHistory::new(path);
        let host = Self {
            history: Rc::new(history.clone()),
            fetcher: Rc::new(fetcher),
            spawner,
            config: Rc::new(GalleryConfig::default()),
        };
        (host, history)
    }
}
