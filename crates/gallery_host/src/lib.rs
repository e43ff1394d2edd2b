//! Typed host contracts and shared models for the gallery client.
//!
//! This crate is the platform-neutral boundary between the view layer in `gallery_ui` and the
//! browser adapters in `gallery_host_web`. It exposes path helpers, the directory-listing model
//! and error taxonomy, the [`DirectoryFetcher`] and [`HistoryBridge`] service traits with
//! in-memory fakes, and the [`GalleryConfig`] model.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod history;
pub mod host;
pub mod listing;
pub mod path;

pub use config::{
    GalleryConfig, DEFAULT_FOLDER_ICON_SRC, DEFAULT_LISTING_QUERY, DEFAULT_THUMBNAIL_QUERY,
    GALLERY_CONFIG_KEY,
};
pub use history::{
    HistoryBridge, LocationListener, LocationSubscription, MemoryHistory, NoopHistoryBridge,
};
pub use host::GalleryHost;
pub use listing::service::{
    DirectoryFetchFuture, DirectoryFetcher, ListingGate, ListingResult, MemoryDirectoryFetcher,
    NoopDirectoryFetcher,
};
pub use listing::types::{decode_listing, DirectoryEntry, ListingError};
pub use path::{child_path, decode_segment, entry_prefix, listing_url, thumbnail_url, ROOT_PATH};
